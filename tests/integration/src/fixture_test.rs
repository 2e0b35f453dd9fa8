//! Fixture-backed loading tests
//!
//! The fixtures under `test-fixtures/configs/` are the same document in
//! both supported formats, plus a malformed variant. JSON and YAML must
//! produce identical stores.

use chanmap_core::{Error, MappingStore, resolve};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/configs")
        .join(name)
}

#[test]
fn json_fixture_loads() {
    let store = MappingStore::load(fixture("categories.json")).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(
        resolve("MIT OpenCourseWare", &store).mapped_channel,
        "OpenCourse - MIT"
    );
}

#[test]
fn yaml_fixture_matches_json_fixture() {
    let json_store = MappingStore::load(fixture("categories.json")).unwrap();
    let yaml_store = MappingStore::load(fixture("categories.yml")).unwrap();

    let json_names: Vec<&str> = json_store.categories().iter().map(|c| c.name.as_str()).collect();
    let yaml_names: Vec<&str> = yaml_store.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(json_names, yaml_names);

    for channel in ["MIT OpenCourseWare", "Stanford Online", "NPR Music", "Unmapped"] {
        assert_eq!(
            resolve(channel, &json_store),
            resolve(channel, &yaml_store),
            "stores disagree on {channel:?}"
        );
    }
}

#[test]
fn malformed_fixture_is_rejected_as_parse_error() {
    let err = MappingStore::load(fixture("malformed-top-level-list.json")).unwrap_err();
    match err {
        Error::ConfigParse { message, .. } => {
            assert!(message.contains("top level"), "got: {message}");
        }
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}
