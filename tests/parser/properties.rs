//! Property tests for the scanning pipeline

use narrata_parser::decompose::{ItemSyntax, decompose, media_list};
use narrata_parser::{Dialects, Scanner};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scanning_arbitrary_text_never_panics(text in "(?s).{0,200}") {
        let dialects = Dialects::builtin().unwrap();
        let _ = Scanner::scan(&dialects.chapter, &text, "ns");
        let _ = Scanner::scan(&dialects.marker, &text, "ns");
        let _ = Scanner::scan(&dialects.place, &text, "ns");
    }

    #[test]
    fn scanning_line_soup_never_panics(
        lines in prop::collection::vec("[@#*> ][ -~]{0,30}", 0..20)
    ) {
        let dialects = Dialects::builtin().unwrap();
        let text = lines.join("\n");
        let _ = Scanner::scan(&dialects.chapter, &text, "ns");
        let _ = Scanner::scan(&dialects.place, &text, "ns");
    }

    #[test]
    fn places_in_distinct_files_have_distinct_names(
        name in "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]",
        a in "[a-z]{1,8}",
        b in "[a-z]{1,8}",
    ) {
        prop_assume!(a != b);
        let d = Dialects::builtin().unwrap().place;
        let line = format!("# {name}\n");
        let left = Scanner::scan(&d, &line, &a);
        let right = Scanner::scan(&d, &line, &b);
        prop_assert_ne!(&left[0].name, &right[0].name);
    }

    #[test]
    fn missing_media_synthesizes_exactly_one_default(name in "[A-Za-z]{1,12}") {
        let d = Dialects::builtin().unwrap().place;
        let places = Scanner::scan(&d, &format!("# {name}"), "ns");
        prop_assert_eq!(places.len(), 1);
        prop_assert_eq!(places[0].media.len(), 1);
        prop_assert_eq!(places[0].media[0].name.to_lowercase(), format!("place{}", name.to_lowercase()));
        prop_assert_eq!(places[0].media[0].properties.as_str(), "1920x1080");
    }

    #[test]
    fn decomposed_segments_are_trimmed(raw in "[a-z:;,&! ]{0,40}") {
        for syntax in [ItemSyntax::MEDIA, ItemSyntax::STYLE, ItemSyntax::PARTY] {
            let tokens = raw.split(syntax.separator).filter(|t| !t.trim().is_empty()).count();
            let items = decompose(&raw, syntax);
            prop_assert_eq!(items.len(), tokens);
            for item in items {
                prop_assert_eq!(item.name.trim(), item.name.as_str());
                prop_assert_eq!(item.properties.trim(), item.properties.as_str());
                prop_assert_eq!(item.flag.trim(), item.flag.as_str());
            }
        }
    }

    #[test]
    fn media_items_never_inherit_from_later_siblings(
        names in prop::collection::vec("[a-z]{1,5}", 1..6),
    ) {
        let raw = format!("{}&9x9", names.join(":"));
        let items = media_list(&raw, "1x1");
        let last = items.len() - 1;
        for item in &items[..last] {
            prop_assert_eq!(item.properties.as_str(), "1x1");
        }
        prop_assert_eq!(items[last].properties.as_str(), "9x9");
    }
}
