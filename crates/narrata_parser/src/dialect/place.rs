//! Place dialect (`.place`).
//!
//! ```text
//! # <name>[&<media>][$<event>][!<flag>][<<style>>]
//! # Garden&bg_garden:bg_garden_night&1280x720$on_enter!outdoor<fade:1s;rain>
//! ```

use narrata_foundation::{Result, namespaced, strip_namespace};

use super::default_media;
use crate::decompose::{CompoundItem, ItemSyntax, decompose, media_list};
use crate::descriptor::Descriptor;

/// Line pattern of a place declaration.
pub const PLACE_PATTERN: &str = r"^#\s(.*?)(?:&(.*?)|)(?:\$(.*?)|)(?:!(.*?)|)(?:<(.*)>|)$";

/// Media properties used when a place names none.
pub const PLACE_MEDIA_PROPERTIES: &str = "1920x1080";

/// A location declared in a `.place` file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Namespaced name (`<file>=><name>`).
    pub name: String,
    /// Event fired on entering the place.
    pub event: String,
    /// Free-form flag.
    pub flag: String,
    /// Backgrounds; never empty after finalize.
    pub media: Vec<CompoundItem>,
    /// Presentation styles.
    pub style: Vec<CompoundItem>,
}

/// Builds the place descriptor.
///
/// # Errors
///
/// Returns an invalid descriptor error if the pattern or field map is malformed.
pub fn descriptor() -> Result<Descriptor<Place>> {
    Descriptor::<Place>::builder("place", PLACE_PATTERN)
        .scalar("name", 1, |p, v| p.name = v)
        .composite(
            "media",
            &[2],
            |raw| media_list(raw[0], PLACE_MEDIA_PROPERTIES),
            |p, v| p.media = v,
        )
        .scalar("event", 3, |p, v| p.event = v)
        .scalar("flag", 4, |p, v| p.flag = v)
        .composite(
            "style",
            &[5],
            |raw| decompose(raw[0], ItemSyntax::STYLE),
            |p, v| p.style = v,
        )
        .finalize(finalize)
        .build()
}

fn finalize(mut place: Place, namespace: &str) -> Place {
    place.name = namespaced(namespace, &place.name);

    if place.media.is_empty() {
        let local = strip_namespace(&place.name, namespace);
        place.media = vec![default_media("place", local, PLACE_MEDIA_PROPERTIES)];
    }

    place
}
