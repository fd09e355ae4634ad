//! Integration tests for the resource catalog

use std::path::PathBuf;

use narrata_engine::{IdGenerator, ResourceCatalog, ResourceKind, UuidGenerator};
use narrata_foundation::LookupTable;

struct Sequence(Vec<&'static str>);

impl IdGenerator for Sequence {
    fn generate(&mut self) -> String {
        self.0.remove(0).to_string()
    }
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|n| PathBuf::from(format!("resources/main/assets/{n}")))
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn catalog_describes_each_file() {
    let files = paths(&["back.garden.png", "effect.door_slam.ogg", "notes.txt"]);
    let mut names = LookupTable::new();
    let mut ids = Sequence(vec!["a", "b", "c"]);

    let resources = ResourceCatalog::build(&files, "MainResources", &mut names, &mut ids);

    let kinds: Vec<_> = resources.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![ResourceKind::Background, ResourceKind::Sound, ResourceKind::Image]
    );
    assert_eq!(resources[1].id, "MainResources.effectDoorSlam");
    assert_eq!(resources[1].tags, vec!["effect", "door", "slam", "ogg"]);
    assert_eq!(resources[1].path, "/assets/effect.door_slam.ogg");

    let entries: Vec<_> = names.iter().collect();
    assert_eq!(
        entries,
        vec![("backGarden", "a"), ("effectDoorSlam", "b"), ("notes", "c")]
    );
}

#[test]
fn known_ids_keep_their_values() {
    let files = paths(&["music.theme.mp3", "video.intro.webm"]);
    let mut names: LookupTable = [("musicTheme", "fixed")].into_iter().collect();
    let mut ids = Sequence(vec!["fresh"]);

    ResourceCatalog::build(&files, "MainResources", &mut names, &mut ids);

    assert_eq!(names.get("musicTheme"), Some("fixed"));
    assert_eq!(names.get("videoIntro"), Some("fresh"));
    assert!(ids.0.is_empty());
}

#[test]
fn uuid_ids_are_unique() {
    let files = paths(&["img.a.png", "img.b.png", "img.c.png"]);
    let mut names = LookupTable::new();
    ResourceCatalog::build(&files, "R", &mut names, &mut UuidGenerator);

    let mut values: Vec<_> = names.iter().map(|(_, v)| v.to_string()).collect();
    values.sort();
    values.dedup();
    assert_eq!(values.len(), 3);
}
