//! Integration tests for the built-in dialects

use narrata_parser::{CompoundItem, Dialect, Dialects, RawFile, Scanner, TextSegment};

fn dialects() -> Dialects {
    Dialects::builtin().unwrap()
}

// =============================================================================
// Places
// =============================================================================

#[test]
fn garden_example() {
    let places = Scanner::scan(&dialects().place, "# Garden&bg_garden<fade:1s>", "ch1");

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "ch1=>Garden");
    assert_eq!(
        places[0].media,
        vec![CompoundItem::new("bg_garden", "1920x1080", "")]
    );
    assert_eq!(places[0].style, vec![CompoundItem::new("fade", "1s", "")]);
}

#[test]
fn place_without_media_gets_default() {
    let places = Scanner::scan(&dialects().place, "# Old Garden$enter\n", "ch1");

    assert_eq!(places[0].name, "ch1=>Old Garden");
    assert_eq!(
        places[0].media,
        vec![CompoundItem::new("PlaceOldGarden", "1920x1080", "")]
    );
    assert_eq!(places[0].event, "enter");
}

// =============================================================================
// Markers
// =============================================================================

#[test]
fn marker_fields() {
    let markers = Scanner::scan(
        &dialects().marker,
        "* Well@120,48&icon_well$on_well!hidden\n* Gate\n",
        "map",
    );

    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].name, "map=>Well");
    assert_eq!(markers[0].position, "120,48");
    assert_eq!(markers[0].media, vec![CompoundItem::new("icon_well", "64x64", "")]);
    assert_eq!(markers[0].event, "on_well");
    assert_eq!(markers[0].flag, "hidden");

    assert_eq!(markers[1].media, vec![CompoundItem::new("MarkerGate", "64x64", "")]);
}

// =============================================================================
// Chapters
// =============================================================================

#[test]
fn chapter_with_dialog() {
    let text = "\
@ Intro[Alice:left,Bob]&bg_intro$start
Narration is ignored.
> Alice&portrait_alice | Look {sfx_door} there.
> Bob!shout | Run!

@ Outro
> Bob | Bye.
";
    let chapters = Scanner::scan(&dialects().chapter, text, "ch1");

    assert_eq!(chapters.len(), 2);
    let intro = &chapters[0];
    assert_eq!(intro.name, "ch1=>Intro");
    assert_eq!(intro.event, "start");
    assert_eq!(intro.party.len(), 2);
    assert_eq!(intro.party[0], CompoundItem::new("Alice", "left", ""));
    assert_eq!(intro.dialog.len(), 2);
    assert_eq!(
        intro.dialog[0].text,
        vec![
            TextSegment::new("Look ", vec![CompoundItem::new("sfx_door", "", "")]),
            TextSegment::new(" there.", vec![]),
        ]
    );
    assert_eq!(intro.dialog[1].flag, "shout");

    assert_eq!(chapters[1].name, "ch1=>Outro");
    assert_eq!(chapters[1].dialog.len(), 1);
    assert_eq!(chapters[1].dialog[0].speaker, "Bob");
}

#[test]
fn crlf_documents_parse_like_lf() {
    let lf = Scanner::scan(&dialects().chapter, "@ A&bg\n> X | hi\n", "c");
    let crlf = Scanner::scan(&dialects().chapter, "@ A&bg\r\n> X | hi\r\n", "c");
    assert_eq!(lf, crlf);
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn files_are_classified_by_extension() {
    for dialect in Dialect::ALL {
        let path = format!("sources/main/file.{}", dialect.extension());
        assert_eq!(RawFile::from_path(path).unwrap().dialect, dialect);
    }
    assert!(RawFile::from_path("sources/main/file.json").is_err());
}
