//! Script dialects.
//!
//! The set of dialects is closed: each [`Dialect`] has exactly one built-in
//! descriptor in [`Dialects`], and dispatch is an exhaustive `match`, so a
//! dialect without a descriptor does not compile.

pub mod chapter;
pub mod marker;
pub mod place;

use std::fmt;
use std::path::{Path, PathBuf};

use narrata_foundation::{Error, Result, namespace_of, to_pascal_case};

use crate::decompose::CompoundItem;
use crate::descriptor::Descriptor;

pub use chapter::{Chapter, DialogLine, TextSegment};
pub use marker::Marker;
pub use place::Place;

/// One of the script sub-languages, selected by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    /// `.chapter` files: chapter headers with party, media and dialog blocks.
    Chapter,
    /// `.marker` files: map markers.
    Marker,
    /// `.place` files: locations.
    Place,
}

impl Dialect {
    /// Every dialect.
    pub const ALL: [Self; 3] = [Self::Chapter, Self::Marker, Self::Place];

    /// File extension without the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Chapter => "chapter",
            Self::Marker => "marker",
            Self::Place => "place",
        }
    }

    /// Looks up a dialect by file extension (without the dot).
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.extension() == extension)
    }

    /// Determines the dialect of a file from its extension.
    ///
    /// # Errors
    ///
    /// Returns an unknown dialect error for any other extension.
    pub fn of_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&extension).ok_or_else(|| {
            Error::unknown_dialect(path.display().to_string(), format!(".{extension}"))
        })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A source file and its dialect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Dialect derived from the extension.
    pub dialect: Dialect,
}

impl RawFile {
    /// Classifies a source file by extension.
    ///
    /// # Errors
    ///
    /// Returns an unknown dialect error if the extension is not a dialect.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let dialect = Dialect::of_path(&path)?;
        Ok(Self { path, dialect })
    }

    /// Namespace of the records declared in this file.
    #[must_use]
    pub fn namespace(&self) -> String {
        namespace_of(&self.path)
    }
}

/// A source file with its text already loaded.
#[derive(Clone, Debug)]
pub struct SourceDocument {
    /// The classified file.
    pub file: RawFile,
    /// Full document text.
    pub text: String,
}

impl SourceDocument {
    /// Wraps loaded text.
    ///
    /// # Errors
    ///
    /// Returns an unknown dialect error if the path is not a dialect file.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            file: RawFile::from_path(path)?,
            text: text.into(),
        })
    }
}

/// The built-in descriptor for every dialect.
pub struct Dialects {
    /// Chapter descriptor.
    pub chapter: Descriptor<Chapter>,
    /// Marker descriptor.
    pub marker: Descriptor<Marker>,
    /// Place descriptor.
    pub place: Descriptor<Place>,
}

impl Dialects {
    /// Builds and validates all built-in descriptors.
    ///
    /// # Errors
    ///
    /// Returns an invalid descriptor error if any descriptor is malformed.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            chapter: chapter::descriptor()?,
            marker: marker::descriptor()?,
            place: place::descriptor()?,
        })
    }
}

/// Synthesizes the single default media item of a record whose media list
/// came out empty: `Pascal("<prefix>-<local name>")` with fixed properties.
#[must_use]
pub fn default_media(prefix: &str, local_name: &str, properties: &str) -> CompoundItem {
    CompoundItem::new(
        to_pascal_case(&format!("{prefix}-{local_name}")),
        properties,
        "",
    )
}
