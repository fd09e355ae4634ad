//! Reading previously generated table files.
//!
//! A table file is an opaque header (everything before the last `export `)
//! followed by one declaration block. The header is kept verbatim; the
//! declarations are re-parsed into a [`LookupTable`] so values filled in by
//! hand survive the next run.

use std::fs;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use narrata_foundation::{
    Error, ErrorContext, LookupTable, Result, to_pascal_case, to_snake_case,
};

/// Declaration keyword splitting a table file into header and body.
pub const EXPORT_KEYWORD: &str = "export ";

/// Map declaration: `key: value,` or `'quoted key': value,`.
///
/// Quoted keys may contain `\'` and `\\` escapes.
pub const MAP_ENTRY_PATTERN: &str =
    r"^\s*(?:'((?:[^'\\]|\\.)*)'|([\w$]*))\s*:\s*(.*?),?\s*$";

/// Enum declaration: `key = 'value'`.
pub const ENUM_ENTRY_PATTERN: &str = r"^\s*(\w*)\s*=\s*'(.*)'";

/// Declaration style of a table file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// `export const X: PackageMap = { key: value, ... };`
    Map,
    /// `export enum X { key = 'value', ... }`
    Enum,
}

/// A table file: location, exported name, and content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableFile {
    /// File location.
    pub path: PathBuf,
    /// Name the file exports.
    pub export: String,
    /// Header and entries.
    pub table: LookupTable,
}

/// Name exported by a table file of `package`.
///
/// Enums export `<Package>Resources`; maps export `<PACKAGE>_RES_MAP` or
/// `<PACKAGE>_CHAR_MAP` depending on the file name, `<PACKAGE>_MAP` otherwise.
#[must_use]
pub fn export_name(path: &Path, package: &str, kind: TableKind) -> String {
    if kind == TableKind::Enum {
        return enum_export_name(package);
    }
    let snake = to_snake_case(package).to_uppercase();
    let file = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    if file.starts_with("res") {
        format!("{snake}_RES_MAP")
    } else if file.starts_with("char") {
        format!("{snake}_CHAR_MAP")
    } else {
        format!("{snake}_MAP")
    }
}

/// Name of the generated resource enum of `package`.
#[must_use]
pub fn enum_export_name(package: &str) -> String {
    format!("{}Resources", to_pascal_case(package))
}

/// Name of the generated resource list of `package`.
#[must_use]
pub fn list_export_name(package: &str) -> String {
    format!("{}_RESOURCES", to_snake_case(package).to_uppercase())
}

/// Splits file content at the last `export `.
///
/// Content without a declaration has an empty header and an empty body.
#[must_use]
pub fn split_header(content: &str) -> (&str, &str) {
    match content.rfind(EXPORT_KEYWORD) {
        Some(at) => content.split_at(at),
        None => ("", ""),
    }
}

/// Parses table files.
#[derive(Clone, Debug)]
pub struct TableReader {
    map_entry: Regex,
    enum_entry: Regex,
}

impl TableReader {
    /// Compiles the declaration patterns.
    ///
    /// # Errors
    ///
    /// Returns an invalid descriptor error if a pattern does not compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            map_entry: compile("map table", MAP_ENTRY_PATTERN)?,
            enum_entry: compile("enum table", ENUM_ENTRY_PATTERN)?,
        })
    }

    /// Parses file content into a table.
    #[must_use]
    pub fn parse(&self, content: &str, kind: TableKind) -> LookupTable {
        let (header, body) = split_header(content);
        let mut table = LookupTable::with_header(header);

        match kind {
            TableKind::Map => {
                for caps in self.map_entry.captures_iter(body) {
                    let key = match (caps.get(1), caps.get(2)) {
                        (Some(quoted), _) => unescape_key(quoted.as_str()),
                        (None, Some(bare)) => bare.as_str().to_string(),
                        (None, None) => String::new(),
                    };
                    if !key.is_empty() {
                        table.insert(key, caps.get(3).map_or("", |m| m.as_str()));
                    }
                }
            }
            TableKind::Enum => {
                for caps in self.enum_entry.captures_iter(body) {
                    let key = caps.get(1).map_or("", |m| m.as_str());
                    if !key.is_empty() {
                        table.insert(key, caps.get(2).map_or("", |m| m.as_str()));
                    }
                }
            }
        }
        table
    }

    /// Reads a table file of `package`; an absent file is an empty table.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn read(&self, path: &Path, package: &str, kind: TableKind) -> Result<TableFile> {
        let table = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::io(format!("failed to read table '{}': {e}", path.display())).with_context(
                    ErrorContext::new()
                        .with_package(package)
                        .with_source(path.display().to_string()),
                )
            })?;
            self.parse(&content, kind)
        } else {
            LookupTable::new()
        };

        Ok(TableFile {
            path: path.to_path_buf(),
            export: export_name(path, package, kind),
            table,
        })
    }
}

/// Reverses the escaping of a quoted map key.
#[must_use]
pub fn unescape_key(quoted: &str) -> String {
    let mut key = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                key.push(escaped);
            }
        } else {
            key.push(c);
        }
    }
    key
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map_err(|e| Error::invalid_descriptor(name, e.to_string()))
}
