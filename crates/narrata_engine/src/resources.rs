//! Resource catalog.
//!
//! Every asset file of a package becomes a [`Resource`]. The resource's
//! identifier lives in the package's name table (the generated enum); an id
//! seen for the first time gets a fresh value from an [`IdGenerator`] while
//! ids from previous runs keep theirs, so generated code stays stable.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};
use uuid::Uuid;

use narrata_foundation::{LookupTable, to_camel_case};

/// Marker from which a resource path is kept.
pub const ASSETS_MARKER: &str = "/assets";

/// Kind of an asset, derived from the first dot-segment of its file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `video.*`
    Video,
    /// `img.*`, `image.*`, `portrait.*`, and anything unrecognized.
    Image,
    /// `sound.*`, `effect.*`
    Sound,
    /// `music.*`
    Music,
    /// `back.*`, `background.*`
    Background,
}

impl ResourceKind {
    /// Looks up a kind by file name prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "back" | "background" => Some(Self::Background),
            "img" | "image" | "portrait" => Some(Self::Image),
            "music" => Some(Self::Music),
            "sound" | "effect" => Some(Self::Sound),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    /// Name used in generated code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Sound => "sound",
            Self::Music => "music",
            Self::Background => "background",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One asset file of a package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    /// Qualified identifier expression (`<Enum>.<key>`).
    pub id: String,
    /// Asset kind.
    pub kind: ResourceKind,
    /// Lower-cased words of the file name.
    pub tags: Vec<String>,
    /// Unix path, starting at `/assets` when the path contains it.
    pub path: String,
}

/// Source of values for newly seen resource ids.
pub trait IdGenerator {
    /// Produces the value for a new id.
    fn generate(&mut self) -> String;
}

/// Generates random UUID v4 values.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Builds resource lists.
pub struct ResourceCatalog;

impl ResourceCatalog {
    /// Describes every file in `paths`, in the given order.
    ///
    /// Each resource key is ensured in `names`; `enum_export` is the name of
    /// the generated enum the qualified ids refer to.
    pub fn build<P: AsRef<Path>>(
        paths: &[P],
        enum_export: &str,
        names: &mut LookupTable,
        ids: &mut impl IdGenerator,
    ) -> Vec<Resource> {
        let mut generated = 0usize;
        let resources: Vec<_> = paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let key = Self::key(path);
                if names.ensure_with(&key, || ids.generate()) {
                    generated += 1;
                }
                let unix = unix_path(path);
                Resource {
                    id: format!("{enum_export}.{key}"),
                    kind: Self::kind(path),
                    tags: Self::tags(path),
                    path: asset_path(&unix).to_string(),
                }
            })
            .collect();

        debug!(resources = resources.len(), generated, "built resource catalog");
        resources
    }

    /// Name-table key of an asset: the camel-cased file stem.
    #[must_use]
    pub fn key(path: &Path) -> String {
        let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        to_camel_case(&stem)
    }

    /// Kind of an asset; unknown prefixes fall back to [`ResourceKind::Image`].
    #[must_use]
    pub fn kind(path: &Path) -> ResourceKind {
        let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        let prefix = stem.split('.').next().unwrap_or_default();
        ResourceKind::from_prefix(prefix).unwrap_or_else(|| {
            warn!(path = %path.display(), "cannot determine resource kind, assuming image");
            ResourceKind::Image
        })
    }

    /// Tags of an asset: file name parts split on `.` and `_`, lower-cased.
    #[must_use]
    pub fn tags(path: &Path) -> Vec<String> {
        let name = path.file_name().map(|s| s.to_string_lossy()).unwrap_or_default();
        name.split('.')
            .flat_map(|part| {
                part.to_lowercase()
                    .split('_')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Converts a path to forward slashes.
#[must_use]
pub fn unix_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Trims a unix path to start at [`ASSETS_MARKER`], if present.
#[must_use]
pub fn asset_path(unix: &str) -> &str {
    unix.find(ASSETS_MARKER).map_or(unix, |at| &unix[at..])
}
