//! Compound field decomposition.
//!
//! A compound field holds a delimited list such as `bg_garden&1280x720:bg_night`
//! or `fade:1s;shake`. The list is split on the level's separator and every
//! token is read by the same small item grammar:
//!
//! ```text
//! item       := name [ property-marker properties ] [ flag-marker flag ]
//! ```
//!
//! The markers are the ones declaration lines use (`&` introduces media,
//! `!` introduces a flag), so one reader serves every nesting level; an
//! [`ItemSyntax`] selects which characters are active at that level.

use std::iter::Peekable;
use std::str::Chars;

/// One item of a compound field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundItem {
    /// Item identifier (a resource name, a character name, a style name).
    pub name: String,
    /// Property segment; meaning is up to the dialect (e.g. `1920x1080`).
    pub properties: String,
    /// Flag segment; meaning is up to the dialect.
    pub flag: String,
}

impl CompoundItem {
    /// Creates an item from its three segments.
    #[must_use]
    pub fn new(name: impl Into<String>, properties: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: properties.into(),
            flag: flag.into(),
        }
    }
}

/// Delimiters active at one nesting level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSyntax {
    /// Separates items in the list.
    pub separator: char,
    /// Introduces the property segment of an item.
    pub property: char,
    /// Introduces the flag segment of an item.
    pub flag: char,
}

impl ItemSyntax {
    /// Media lists: `bg_garden&1920x1080:bg_night!loop`.
    pub const MEDIA: Self = Self {
        separator: ':',
        property: '&',
        flag: '!',
    };

    /// Style lists: `fade:1s;shake!strong`.
    pub const STYLE: Self = Self {
        separator: ';',
        property: ':',
        flag: '!',
    };

    /// Party lists: `Alice:left,Bob:right!hidden`.
    pub const PARTY: Self = Self {
        separator: ',',
        property: ':',
        flag: '!',
    };
}

struct ItemReader<'a> {
    chars: Peekable<Chars<'a>>,
    syntax: ItemSyntax,
}

impl<'a> ItemReader<'a> {
    fn new(token: &'a str, syntax: ItemSyntax) -> Self {
        Self {
            chars: token.chars().peekable(),
            syntax,
        }
    }

    fn eat(&mut self, marker: char) -> bool {
        if self.chars.peek() == Some(&marker) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn segment(&mut self, stops: &[char]) -> String {
        let mut out = String::new();
        while let Some(&c) = self.chars.peek() {
            if stops.contains(&c) {
                break;
            }
            out.push(c);
            self.chars.next();
        }
        out.trim().to_string()
    }

    fn item(mut self) -> CompoundItem {
        let ItemSyntax { property, flag, .. } = self.syntax;

        let name = self.segment(&[property, flag]);
        let properties = if self.eat(property) {
            self.segment(&[flag])
        } else {
            String::new()
        };
        let flag = if self.eat(flag) {
            self.segment(&[])
        } else {
            String::new()
        };

        CompoundItem {
            name,
            properties,
            flag,
        }
    }
}

/// Reads one item token.
#[must_use]
pub fn read_item(token: &str, syntax: ItemSyntax) -> CompoundItem {
    ItemReader::new(token, syntax).item()
}

/// Splits a compound field into items. Blank tokens are skipped, so an
/// empty field yields an empty list.
#[must_use]
pub fn decompose(raw: &str, syntax: ItemSyntax) -> Vec<CompoundItem> {
    raw.split(syntax.separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| read_item(token, syntax))
        .collect()
}

/// Fills missing properties from the first item of the list.
///
/// When the first item has no properties either, `fallback` is used for it
/// and for every later item lacking its own.
pub fn inherit_properties(items: &mut [CompoundItem], fallback: &str) {
    let Some(first) = items.first() else {
        return;
    };
    let inherited = if first.properties.is_empty() {
        fallback.to_string()
    } else {
        first.properties.clone()
    };
    for item in items.iter_mut().filter(|i| i.properties.is_empty()) {
        item.properties.clone_from(&inherited);
    }
}

/// Decomposes a media list and applies property inheritance.
#[must_use]
pub fn media_list(raw: &str, fallback: &str) -> Vec<CompoundItem> {
    let mut items = decompose(raw, ItemSyntax::MEDIA);
    inherit_properties(&mut items, fallback);
    items
}
