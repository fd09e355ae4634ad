//! Chapter dialect (`.chapter`).
//!
//! A chapter is a block: a header line followed by a body that runs until
//! the next line beginning with `@`.
//!
//! ```text
//! @ <name>[[<party>]][&<media>][$<event>]
//! > <speaker>[&<media>][!<flag>] | <text with {media cues}>
//!
//! @ Intro[Alice:left,Bob:right]&bg_intro$intro_start
//! The lights come up slowly.
//! > Alice&portrait_alice | Did you hear that? {sfx_door}
//! > Bob!whisper | Stay quiet.
//! ```
//!
//! The body is a compound field like any other; it is decomposed by scanning
//! it with the nested dialog-line descriptor, and each dialog text is split
//! into segments carrying inline media cues.

use narrata_foundation::{Result, namespaced};

use crate::decompose::{CompoundItem, ItemSyntax, decompose, media_list};
use crate::descriptor::Descriptor;
use crate::scanner::Scanner;

/// Block pattern of a chapter: header line plus body.
pub const CHAPTER_PATTERN: &str =
    r"^@\s(.*?)(?:\[(.*?)\]|)(?:&(.*?)|)(?:\$(.*?)|)$((?:\n(?:[^@\n].*)?)*)";

/// Line pattern of a dialog line inside a chapter body.
pub const DIALOG_PATTERN: &str = r"^>\s(.*?)(?:&(.*?)|)(?:!(.*?)|)\s*\|\s?(.*)$";

/// Media properties used when a chapter background names none.
pub const CHAPTER_MEDIA_PROPERTIES: &str = "1920x1080";

/// Media properties used when a dialog portrait names none.
pub const DIALOG_MEDIA_PROPERTIES: &str = "512x512";

/// A chapter declared in a `.chapter` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    /// Namespaced name (`<file>=><name>`).
    pub name: String,
    /// Characters taking part in the chapter.
    pub party: Vec<CompoundItem>,
    /// Backgrounds.
    pub media: Vec<CompoundItem>,
    /// Event fired when the chapter starts.
    pub event: String,
    /// Dialog lines of the body, in order.
    pub dialog: Vec<DialogLine>,
}

/// One spoken line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogLine {
    /// Speaker name, verbatim.
    pub speaker: String,
    /// Portraits shown with the line.
    pub media: Vec<CompoundItem>,
    /// Free-form flag.
    pub flag: String,
    /// Text split into segments.
    pub text: Vec<TextSegment>,
}

/// A run of dialog text and the media cues that close it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSegment {
    /// Text of the run, verbatim.
    pub text: String,
    /// Cues from the `{...}` that ended the run; empty for the final run.
    pub media: Vec<CompoundItem>,
}

impl TextSegment {
    /// Creates a segment.
    #[must_use]
    pub fn new(text: impl Into<String>, media: Vec<CompoundItem>) -> Self {
        Self {
            text: text.into(),
            media,
        }
    }
}

/// Splits dialog text on `{<media list>}` cues.
///
/// An unterminated `{` is kept as literal text.
#[must_use]
pub fn text_segments(raw: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut rest = raw;

    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open + 1..].find('}') else {
            break;
        };
        let cue = &rest[open + 1..open + 1 + len];
        segments.push(TextSegment::new(&rest[..open], media_list(cue, "")));
        rest = &rest[open + len + 2..];
    }

    if !rest.is_empty() {
        segments.push(TextSegment::new(rest, Vec::new()));
    }
    segments
}

/// Builds the nested dialog-line descriptor.
///
/// # Errors
///
/// Returns an invalid descriptor error if the pattern or field map is malformed.
pub fn dialog_descriptor() -> Result<Descriptor<DialogLine>> {
    Descriptor::<DialogLine>::builder("dialog", DIALOG_PATTERN)
        .scalar("speaker", 1, |d, v| d.speaker = v)
        .composite(
            "media",
            &[2],
            |raw| media_list(raw[0], DIALOG_MEDIA_PROPERTIES),
            |d, v| d.media = v,
        )
        .scalar("flag", 3, |d, v| d.flag = v)
        .composite("text", &[4], |raw| text_segments(raw[0]), |d, v| d.text = v)
        .build()
}

/// Builds the chapter descriptor.
///
/// # Errors
///
/// Returns an invalid descriptor error if this or the nested dialog
/// descriptor is malformed.
pub fn descriptor() -> Result<Descriptor<Chapter>> {
    let dialog = dialog_descriptor()?;

    Descriptor::<Chapter>::builder("chapter", CHAPTER_PATTERN)
        .scalar("name", 1, |c, v| c.name = v)
        .composite(
            "party",
            &[2],
            |raw| decompose(raw[0], ItemSyntax::PARTY),
            |c, v| c.party = v,
        )
        .composite(
            "media",
            &[3],
            |raw| media_list(raw[0], CHAPTER_MEDIA_PROPERTIES),
            |c, v| c.media = v,
        )
        .scalar("event", 4, |c, v| c.event = v)
        .composite(
            "dialog",
            &[5],
            move |raw| Scanner::scan(&dialog, raw[0], ""),
            |c, v| c.dialog = v,
        )
        .finalize(|mut chapter, namespace| {
            chapter.name = namespaced(namespace, &chapter.name);
            chapter
        })
        .build()
}
