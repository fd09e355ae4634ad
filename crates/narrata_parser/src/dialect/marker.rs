//! Marker dialect (`.marker`).
//!
//! ```text
//! * <name>[@<position>][&<media>][$<event>][!<flag>]
//! * Well@120,48&icon_well$on_well!hidden
//! ```

use narrata_foundation::{Result, namespaced, strip_namespace};

use super::default_media;
use crate::decompose::{CompoundItem, media_list};
use crate::descriptor::Descriptor;

/// Line pattern of a marker declaration.
pub const MARKER_PATTERN: &str = r"^\*\s(.*?)(?:@(.*?)|)(?:&(.*?)|)(?:\$(.*?)|)(?:!(.*?)|)$";

/// Media properties used when a marker names none.
pub const MARKER_MEDIA_PROPERTIES: &str = "64x64";

/// A map marker declared in a `.marker` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    /// Namespaced name (`<file>=><name>`).
    pub name: String,
    /// Position on the map, verbatim (e.g. `120,48`).
    pub position: String,
    /// Icons; never empty after finalize.
    pub media: Vec<CompoundItem>,
    /// Event fired when the marker is activated.
    pub event: String,
    /// Free-form flag.
    pub flag: String,
}

/// Builds the marker descriptor.
///
/// # Errors
///
/// Returns an invalid descriptor error if the pattern or field map is malformed.
pub fn descriptor() -> Result<Descriptor<Marker>> {
    Descriptor::<Marker>::builder("marker", MARKER_PATTERN)
        .scalar("name", 1, |m, v| m.name = v)
        .scalar("position", 2, |m, v| m.position = v)
        .composite(
            "media",
            &[3],
            |raw| media_list(raw[0], MARKER_MEDIA_PROPERTIES),
            |m, v| m.media = v,
        )
        .scalar("event", 4, |m, v| m.event = v)
        .scalar("flag", 5, |m, v| m.flag = v)
        .finalize(finalize)
        .build()
}

fn finalize(mut marker: Marker, namespace: &str) -> Marker {
    marker.name = namespaced(namespace, &marker.name);

    if marker.media.is_empty() {
        let local = strip_namespace(&marker.name, namespace);
        marker.media = vec![default_media("marker", local, MARKER_MEDIA_PROPERTIES)];
    }

    marker
}
