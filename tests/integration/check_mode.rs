//! Check mode and configuration tests

use std::fs;
use std::path::Path;

use narrata_engine::UuidGenerator;
use narrata_foundation::ErrorKind;
use narrata_runtime::{Project, ProjectOptions};

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn check_mode_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let options = ProjectOptions::rooted(dir.path());
    write(&options.sources_dir.join("main/a.place"), "# A&bg_a\n");

    let check = Project::new(options.clone().with_check_only(true)).unwrap();
    let outcomes = check.run(&mut UuidGenerator).unwrap();
    assert_eq!(outcomes[0].changed.len(), 3);
    assert!(!options.output_dir.exists());

    Project::new(options.clone()).unwrap().run(&mut UuidGenerator).unwrap();
    let outcomes = check.run(&mut UuidGenerator).unwrap();
    assert!(outcomes[0].changed.is_empty());

    write(&options.sources_dir.join("main/b.place"), "# B&bg_b\n");
    let outcomes = check.run(&mut UuidGenerator).unwrap();
    assert!(!outcomes[0].changed.is_empty());
}

#[test]
fn custom_engine_import_and_suffixes() {
    let dir = tempfile::tempdir().unwrap();
    let options = ProjectOptions::rooted(dir.path())
        .with_engine_import("@game/core")
        .with_map_suffix(".map.js")
        .with_package_suffix(".package.js");
    write(&options.sources_dir.join("story/a.place"), "# A\n");

    Project::new(options.clone()).unwrap().run(&mut UuidGenerator).unwrap();

    let out = options.output_dir.join("story");
    let char_map = fs::read_to_string(out.join("char.map.js")).unwrap();
    assert!(char_map.starts_with("import { PackageMap } from '@game/core';\n"));
    assert!(char_map.contains("export const STORY_CHAR_MAP"));
    assert!(out.join("story.package.js").exists());
    assert!(!out.join("res.enum.ts").exists());
}

#[test]
fn missing_sources_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = Project::new(ProjectOptions::rooted(dir.path()))
        .unwrap()
        .run(&mut UuidGenerator)
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingDirectory(_)));
}
