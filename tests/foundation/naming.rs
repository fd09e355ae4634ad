//! Integration tests for namespacing and case conversion

use std::path::Path;

use narrata_foundation::{
    NAMESPACE_MARKER, namespace_of, namespaced, strip_namespace, to_camel_case, to_pascal_case,
    to_snake_case,
};

// =============================================================================
// Namespaces
// =============================================================================

#[test]
fn namespace_round_trip() {
    let ns = namespace_of(Path::new("sources/main/ch1.place"));
    let name = namespaced(&ns, "Garden");
    assert_eq!(name, "ch1=>Garden");
    assert!(name.contains(NAMESPACE_MARKER));
    assert_eq!(strip_namespace(&name, &ns), "Garden");
}

#[test]
fn same_local_name_in_different_files() {
    let a = namespaced(&namespace_of(Path::new("ch1.place")), "Garden");
    let b = namespaced(&namespace_of(Path::new("ch2.place")), "Garden");
    assert_ne!(a, b);
}

// =============================================================================
// Case Conversion
// =============================================================================

#[test]
fn case_conversions_agree_on_words() {
    for input in ["main story", "main-story", "main_story", "mainStory", "MainStory"] {
        assert_eq!(to_pascal_case(input), "MainStory", "{input}");
        assert_eq!(to_camel_case(input), "mainStory", "{input}");
        assert_eq!(to_snake_case(input), "main_story", "{input}");
    }
}

#[test]
fn resource_stems() {
    assert_eq!(to_camel_case("back.garden"), "backGarden");
    assert_eq!(to_camel_case("portrait.alice_happy"), "portraitAliceHappy");
}
