//! Integration tests for the cross-reference merge

use narrata_engine::{CrossReference, PackTables, is_placeholder};
use narrata_foundation::LookupTable;
use narrata_parser::{Aggregate, Aggregator, SourceDocument};
use proptest::prelude::*;

fn aggregate(docs: &[(&str, &str)]) -> Aggregate {
    let docs: Vec<_> = docs
        .iter()
        .map(|(path, text)| SourceDocument::new(*path, *text).unwrap())
        .collect();
    Aggregator::new().unwrap().aggregate(&docs)
}

// =============================================================================
// Merge Semantics
// =============================================================================

#[test]
fn existing_value_is_kept_and_new_key_appended() {
    let agg = aggregate(&[("main/ch1.place", "# Garden&newKey\n# Hall&oldKey\n")]);
    let tables = PackTables {
        characters: LookupTable::new(),
        resources: [("oldKey", "'translated value'")].into_iter().collect(),
    };

    let (tables, _) = CrossReference::merge(&agg, tables);

    let entries: Vec<_> = tables.resources.iter().collect();
    assert_eq!(entries, vec![("oldKey", "'translated value'"), ("newKey", "")]);
}

#[test]
fn header_passes_through() {
    let agg = aggregate(&[("main/ch1.place", "# Garden&bg\n")]);
    let tables = PackTables {
        characters: LookupTable::with_header("// characters\n"),
        resources: LookupTable::with_header("// resources\n"),
    };

    let (tables, _) = CrossReference::merge(&agg, tables);
    assert_eq!(tables.characters.header, "// characters\n");
    assert_eq!(tables.resources.header, "// resources\n");
}

#[test]
fn nested_cue_media_is_collected() {
    let agg = aggregate(&[(
        "main/ch1.chapter",
        "@ A\n> Bob&portrait_bob | one {sfx_a:sfx_b} two {`sfx_x`}\n",
    )]);
    let (tables, report) = CrossReference::merge(&agg, PackTables::default());

    let keys: Vec<_> = tables.resources.keys().collect();
    assert_eq!(keys, vec!["portrait_bob", "sfx_a", "sfx_b"]);
    assert_eq!(report.placeholders, 1);
    assert!(tables.characters.is_empty());
}

#[test]
fn default_media_is_a_resource() {
    let agg = aggregate(&[("main/ch1.place", "# Garden\n"), ("main/map.marker", "* Well\n")]);
    let (tables, _) = CrossReference::merge(&agg, PackTables::default());

    let keys: Vec<_> = tables.resources.keys().collect();
    assert_eq!(keys, vec!["PlaceGarden", "MarkerWell"]);
}

// =============================================================================
// Stale Keys
// =============================================================================

#[test]
fn unreferenced_keys_are_never_removed() {
    let tables = PackTables {
        characters: [("Gone", "'Gone'")].into_iter().collect(),
        resources: [("bg_gone", "MainResources.gone")].into_iter().collect(),
    };
    let agg = aggregate(&[("main/ch1.chapter", "@ A[Alice]&bg_new\n")]);

    let (tables, report) = CrossReference::merge(&agg, tables);

    assert_eq!(tables.characters.get("Gone"), Some("'Gone'"));
    assert_eq!(tables.resources.get("bg_gone"), Some("MainResources.gone"));
    assert_eq!(report.stale_characters, vec!["Gone".to_string()]);
    assert_eq!(report.stale_resources, vec!["bg_gone".to_string()]);

    let keys: Vec<_> = tables.characters.keys().collect();
    assert_eq!(keys, vec!["Gone", "Alice"]);
}

// =============================================================================
// Properties
// =============================================================================

fn chapter_text(party: &[String], media: &[String]) -> String {
    format!("@ Scene[{}]&{}\n", party.join(","), media.join(":"))
}

proptest! {
    #[test]
    fn merge_is_idempotent(
        party in prop::collection::vec("[A-Za-z]{1,6}", 0..5),
        media in prop::collection::vec("[a-z_]{1,8}", 0..5),
    ) {
        let agg = aggregate(&[("main/a.chapter", chapter_text(&party, &media).as_str())]);
        let (once, _) = CrossReference::merge(&agg, PackTables::default());
        let (twice, report) = CrossReference::merge(&agg, once.clone());
        prop_assert_eq!(once, twice);
        prop_assert!(!report.changed());
    }

    #[test]
    fn filled_values_are_never_overwritten(
        filled in prop::collection::btree_map("[a-z]{1,6}", "'[A-Za-z ]{1,8}'", 1..6),
        extra in prop::collection::vec("[a-z]{1,6}", 0..4),
    ) {
        let media: Vec<String> = filled.keys().cloned().chain(extra).collect();
        let agg = aggregate(&[("main/a.chapter", chapter_text(&[], &media).as_str())]);
        let tables = PackTables {
            characters: LookupTable::new(),
            resources: filled.clone().into_iter().collect(),
        };

        let (tables, _) = CrossReference::merge(&agg, tables);
        for (key, value) in &filled {
            prop_assert_eq!(tables.resources.get(key), Some(value.as_str()));
        }
    }

    #[test]
    fn placeholders_never_become_keys(
        names in prop::collection::vec("`?[a-z]{1,6}`?", 1..8),
    ) {
        let agg = aggregate(&[("main/a.chapter", chapter_text(&names, &names).as_str())]);
        let (tables, _) = CrossReference::merge(&agg, PackTables::default());
        for key in tables.characters.keys().chain(tables.resources.keys()) {
            prop_assert!(!is_placeholder(key));
        }
    }
}
