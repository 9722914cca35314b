//! Generated file checks: determinism, writing and formatting.

use std::str::FromStr;

use ramlapi_codegen::{
    Formatter, GenerateOptions, Generator, Language, Overwrite, WriteResult,
};
use ramlapi_spec::ApiDefinition;
use tempfile::TempDir;

const API: &str = r#"#%RAML 0.8
title: Test API
/users:
  get:
    displayName: List users
  post:
    displayName: Create user
  /{id}:
    get:
      displayName: Get user
/health:
  get:
    displayName: Health check
"#;

fn api() -> ApiDefinition {
    ApiDefinition::from_str(API).expect("Failed to parse RAML")
}

fn no_format() -> GenerateOptions {
    GenerateOptions::default().format(false)
}

#[test]
fn test_render_is_deterministic() {
    let api = api();
    for language in Language::ALL {
        let generator = Generator::new(&api).language(language);
        assert_eq!(generator.render().unwrap(), generator.render().unwrap());
    }
}

#[test]
fn test_map_and_stubs_share_order() {
    let api = api();
    let source = Generator::new(&api).render().unwrap();

    let order = ["HealthCheck", "ListUsers", "CreateUser", "GetUser"];
    let entries: Vec<usize> = order
        .iter()
        .map(|name| source.find(&format!("\t\"{}\": {},", name, name)).unwrap())
        .collect();
    let stubs: Vec<usize> = order
        .iter()
        .map(|name| source.find(&format!("func {}(", name)).unwrap())
        .collect();

    assert!(entries.windows(2).all(|w| w[0] < w[1]));
    assert!(stubs.windows(2).all(|w| w[0] < w[1]));
    assert!(entries[3] < stubs[0]);
}

#[test]
fn test_duplicate_handlers_are_emitted_twice() {
    let api = ApiDefinition::from_str(
        r#"#%RAML 0.8
title: Test API
/cats:
  get:
    displayName: List
/dogs:
  get:
    displayName: List
"#,
    )
    .unwrap();

    let rendered = Generator::new(&api).render_all().unwrap();
    assert_eq!(rendered.handlers, vec!["List", "List"]);
    assert_eq!(rendered.source.matches("func List(").count(), 2);
}

#[test]
fn test_generate_writes_file() {
    let api = api();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen").join("handlers_gen.go");

    let report = Generator::new(&api).generate(&path, &no_format()).unwrap();

    assert_eq!(report.write, WriteResult::Written);
    assert_eq!(report.endpoints, 4);
    assert_eq!(report.handlers.len(), 4);
    assert!(report.skipped.is_empty());
    assert!(!report.formatted);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, Generator::new(&api).render().unwrap());
}

#[test]
fn test_generate_rust_module() {
    let api = api();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("handlers.rs");

    Generator::new(&api)
        .language(Language::from_path(&path))
        .generate(&path, &no_format())
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("pub fn route_map() -> HashMap<&'static str, Handler> {"));
    assert!(written.contains("    routes.insert(\"GetUser\", GetUser);\n"));
    assert!(written.contains("/// Handles the URI `/users/{id}` and the action GET."));
}

#[test]
fn test_skip_existing_leaves_file_untouched() {
    let api = api();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("handlers_gen.go");
    std::fs::write(&path, "// hand edited\n").unwrap();

    let options = no_format().overwrite(Overwrite::IfMissing);
    let report = Generator::new(&api).generate(&path, &options).unwrap();

    assert_eq!(report.write, WriteResult::Skipped);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "// hand edited\n");
}

#[test]
fn test_formatter_failure_is_not_fatal() {
    let api = api();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("handlers_gen.go");

    let options = GenerateOptions::default().formatter(Formatter::new("ramlgen-missing-formatter"));
    let report = Generator::new(&api).generate(&path, &options).unwrap();

    assert_eq!(report.write, WriteResult::Written);
    assert!(!report.formatted);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        Generator::new(&api).render().unwrap()
    );
}
