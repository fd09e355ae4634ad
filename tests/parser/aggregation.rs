//! Integration tests for whole-project aggregation

use narrata_parser::{Aggregator, SourceDocument};

fn doc(path: &str, text: &str) -> SourceDocument {
    SourceDocument::new(path, text).unwrap()
}

#[test]
fn documents_are_processed_in_path_order() {
    let docs = vec![
        doc("main/b.place", "# B\n"),
        doc("main/a.place", "# A\n"),
        doc("main/c.place", "# C\n"),
    ];
    let agg = Aggregator::new().unwrap().aggregate(&docs);

    let names: Vec<_> = agg.places.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a=>A", "b=>B", "c=>C"]);
}

#[test]
fn empty_documents_yield_no_records() {
    let docs = vec![doc("main/a.chapter", ""), doc("main/b.marker", "just prose\n")];
    let agg = Aggregator::new().unwrap().aggregate(&docs);
    assert!(agg.is_empty());
}

#[test]
fn same_local_name_in_two_files() {
    let docs = vec![doc("main/ch1.place", "# Garden\n"), doc("main/ch2.place", "# Garden\n")];
    let agg = Aggregator::new().unwrap().aggregate(&docs);

    assert_eq!(agg.places.len(), 2);
    assert_ne!(agg.places[0].name, agg.places[1].name);
    assert_eq!(agg.places[0].media[0].name, "PlaceGarden");
}
