//! Cross-reference and merge.
//!
//! Walks an [`Aggregate`] for every character name (chapter party members)
//! and every resource name (each media list at any nesting level), drops
//! placeholders, and merges the names into the tables of the previous run.
//!
//! The merge only ever appends: a key that is already present keeps its
//! value, even if a human filled it in since the last run, and a key that is
//! no longer referenced is reported as stale but kept.

use std::collections::HashSet;

use tracing::{debug, warn};

use narrata_foundation::LookupTable;
use narrata_parser::Aggregate;

/// Delimiter marking a placeholder name (`` `player` ``).
pub const PLACEHOLDER_DELIMITER: char = '`';

/// Returns true if `name` both starts and ends with the placeholder delimiter.
///
/// Placeholders are substituted at runtime and never belong in a static table.
#[must_use]
pub fn is_placeholder(name: &str) -> bool {
    name.starts_with(PLACEHOLDER_DELIMITER) && name.ends_with(PLACEHOLDER_DELIMITER)
}

/// The two lookup tables maintained for a package.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackTables {
    /// Character name -> display value.
    pub characters: LookupTable,
    /// Resource name -> resource expression.
    pub resources: LookupTable,
}

/// What a merge changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Character keys appended by this merge.
    pub added_characters: Vec<String>,
    /// Resource keys appended by this merge.
    pub added_resources: Vec<String>,
    /// Number of placeholder references skipped.
    pub placeholders: usize,
    /// Character keys present in the table but no longer referenced.
    pub stale_characters: Vec<String>,
    /// Resource keys present in the table but no longer referenced.
    pub stale_resources: Vec<String>,
}

impl MergeReport {
    /// Returns true if the merge appended any key.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.added_characters.is_empty() || !self.added_resources.is_empty()
    }
}

/// Builds and merges the cross-reference tables.
pub struct CrossReference;

impl CrossReference {
    /// Every character name referenced as a party member, in record order.
    #[must_use]
    pub fn character_names(aggregate: &Aggregate) -> Vec<&str> {
        aggregate
            .chapters
            .iter()
            .flat_map(|c| c.party.iter())
            .map(|item| item.name.as_str())
            .collect()
    }

    /// Every resource name referenced by a media list.
    ///
    /// Order: chapter backgrounds, dialog portraits, dialog text cues,
    /// place media, marker media.
    #[must_use]
    pub fn resource_names(aggregate: &Aggregate) -> Vec<&str> {
        let chapters = &aggregate.chapters;
        let dialog = chapters.iter().flat_map(|c| c.dialog.iter());

        let chapter_media = chapters.iter().flat_map(|c| c.media.iter());
        let dialog_media = dialog.clone().flat_map(|d| d.media.iter());
        let cue_media = dialog
            .flat_map(|d| d.text.iter())
            .flat_map(|segment| segment.media.iter());
        let place_media = aggregate.places.iter().flat_map(|p| p.media.iter());
        let marker_media = aggregate.markers.iter().flat_map(|m| m.media.iter());

        chapter_media
            .chain(dialog_media)
            .chain(cue_media)
            .chain(place_media)
            .chain(marker_media)
            .map(|item| item.name.as_str())
            .collect()
    }

    /// Merges the names referenced by `aggregate` into `tables`.
    ///
    /// New keys are appended with an empty value in first-discovery order;
    /// existing keys and their values are left untouched.
    #[must_use]
    pub fn merge(aggregate: &Aggregate, mut tables: PackTables) -> (PackTables, MergeReport) {
        let mut report = MergeReport::default();

        let characters = Self::character_names(aggregate);
        let resources = Self::resource_names(aggregate);

        report.stale_characters = stale_keys(&tables.characters, &characters);
        report.stale_resources = stale_keys(&tables.resources, &resources);

        report.added_characters =
            ensure_all(&mut tables.characters, &characters, &mut report.placeholders);
        report.added_resources =
            ensure_all(&mut tables.resources, &resources, &mut report.placeholders);

        debug!(
            characters = characters.len(),
            resources = resources.len(),
            added_characters = report.added_characters.len(),
            added_resources = report.added_resources.len(),
            placeholders = report.placeholders,
            "merged cross-reference tables"
        );
        for key in report.stale_characters.iter().chain(&report.stale_resources) {
            warn!(key = %key, "table key is no longer referenced by any source");
        }

        (tables, report)
    }
}

fn ensure_all(table: &mut LookupTable, names: &[&str], placeholders: &mut usize) -> Vec<String> {
    let mut added = Vec::new();
    for &name in names {
        if is_placeholder(name) {
            *placeholders += 1;
            continue;
        }
        if table.ensure(name) {
            added.push(name.to_string());
        }
    }
    added
}

fn stale_keys(table: &LookupTable, names: &[&str]) -> Vec<String> {
    let referenced: HashSet<&str> = names.iter().copied().collect();
    table
        .keys()
        .filter(|key| !referenced.contains(key))
        .map(str::to_string)
        .collect()
}
