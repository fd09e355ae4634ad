//! Custom descriptors built on the shared scanning machinery

use narrata_foundation::{ErrorKind, namespaced};
use narrata_parser::decompose::media_list;
use narrata_parser::{CompoundItem, Descriptor, Scanner};

#[derive(Debug, Default, PartialEq)]
struct Cue {
    name: String,
    media: Vec<CompoundItem>,
    note: String,
}

fn cue_descriptor() -> Descriptor<Cue> {
    Descriptor::<Cue>::builder("cue", r"^~\s(.*?)(?:&(.*?)|)(?:%(.*?)|)$")
        .scalar("name", 1, |c, v| c.name = v)
        .composite("media", &[2], |raw| media_list(raw[0], "0x0"), |c, v| c.media = v)
        .scalar("note", 3, |c, v| c.note = v)
        .finalize(|mut cue, ns| {
            cue.name = namespaced(ns, &cue.name);
            cue
        })
        .build()
        .unwrap()
}

// =============================================================================
// Custom Dialects
// =============================================================================

#[test]
fn custom_descriptor_scans_document() {
    let cues = Scanner::scan(
        &cue_descriptor(),
        "~ Start&sfx_a:sfx_b&loud%first\nprose\n~ End\n",
        "act1",
    );

    assert_eq!(
        cues,
        vec![
            Cue {
                name: "act1=>Start".into(),
                media: vec![
                    CompoundItem::new("sfx_a", "0x0", ""),
                    CompoundItem::new("sfx_b", "loud", ""),
                ],
                note: "first".into(),
            },
            Cue {
                name: "act1=>End".into(),
                media: vec![],
                note: String::new(),
            },
        ]
    );
}

#[test]
fn fields_are_listed_in_declaration_order() {
    let d = cue_descriptor();
    let names: Vec<_> = d.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["name", "media", "note"]);
    assert!(d.pattern().is_match("~ x"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn out_of_range_group_is_rejected() {
    let err = Descriptor::<Cue>::builder("cue", r"^~\s(.*)$")
        .scalar("note", 3, |c, v| c.note = v)
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDescriptor { ref descriptor, .. } if descriptor == "cue"));
}
