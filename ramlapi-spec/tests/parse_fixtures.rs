//! Parsing tests against RAML files on disk.

use std::path::PathBuf;

use ramlapi_spec::{ApiDefinition, Error, RamlFile, Verb};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_open_valid_fixture() {
    let file = RamlFile::open(fixture("valid.raml")).expect("Failed to open fixture");
    let api = file.api();

    assert!(file.content().starts_with("#%RAML 0.8"));
    assert_eq!(api.title, "Music Library");
    assert_eq!(api.version.as_deref(), Some("v1"));
    assert_eq!(
        api.resources.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["/artists", "/songs"]
    );
    assert_eq!(api.method_count(), 5);

    let songs = &api.resources["/songs"];
    let list = songs.method(Verb::Get).unwrap();
    assert_eq!(list.description, "Browse the song catalogue");
    assert!(list.query_parameters["artist"].required);
    assert!(!list.query_parameters["title"].required);

    let song = &songs.children["/{songId}"];
    let id = &song.uri_parameters["songId"];
    assert_eq!(id.kind, "integer");
    assert_eq!(id.pattern.as_deref(), Some("[0-9]+"));
    assert!(id.required);
}

#[test]
fn test_from_file_matches_open() {
    let path = fixture("valid.raml");
    let api = ApiDefinition::from_file(&path).unwrap();
    let file = RamlFile::open(&path).unwrap();
    assert_eq!(&api, file.api());
    assert_eq!(file.path(), path.as_path());
}

#[test]
fn test_invalid_fixture_reports_nested_resource() {
    let err = match RamlFile::open(fixture("invalid.raml")) {
        Ok(_) => panic!("expected invalid fixture to fail"),
        Err(err) => err,
    };
    assert!(
        err.message()
            .starts_with("invalid GET method on resource '/songs/{songId}'"),
        "unexpected message: {}",
        err.message()
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let err = match RamlFile::open(fixture("does-not-exist.raml")) {
        Ok(_) => panic!("expected missing file to fail"),
        Err(err) => err,
    };
    assert!(matches!(*err, Error::Io { .. }));
    assert!(err.message().contains("does-not-exist.raml"));
}
