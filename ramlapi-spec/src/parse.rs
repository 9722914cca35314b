//! RAML parsing from files and strings.
//!
//! Only the parts of RAML that shape the route table are read: resources,
//! their URI parameters, methods and query parameters. Everything else
//! (`schemas`, `traits`, `securedBy`, ...) is accepted and ignored.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Deserialize;
use serde_yaml::Value;

use crate::{
    ApiDefinition, Error, Method, NamedParameter, Resource, Result, Verb, error::SourceContext,
};

const HEADER: &str = "#%RAML";

impl FromStr for ApiDefinition {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "api.raml")
    }
}

impl ApiDefinition {
    /// Parse a RAML file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse a RAML document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }
}

/// Parse a RAML document with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<ApiDefinition> {
    let source = SourceContext::new(content, filename);
    check_header(content, &source)?;

    let root: Value = serde_yaml::from_str(content).map_err(|e| source.parse_error(e))?;
    let ctx = ParseContext::new(&source);
    let Value::Mapping(root) = root else {
        return Err(ctx.error("RAML document must be a mapping of top-level keys"));
    };

    let title = match root.get("title") {
        Some(value) => ctx.push("title").scalar(value, "title")?,
        None => return Err(ctx.error("missing required field 'title'")),
    };
    let version = root
        .get("version")
        .map(|v| ctx.push("version").scalar(v, "version"))
        .transpose()?;
    let base_uri = root
        .get("baseUri")
        .map(|v| ctx.push("baseUri").scalar(v, "baseUri"))
        .transpose()?;

    let mut api = ApiDefinition {
        title,
        version,
        base_uri,
        resources: Default::default(),
    };

    for (key, value) in &root {
        let key = ctx.key(key)?;
        if key.starts_with('/') {
            let resource = parse_resource(&ctx.push(key), key, value)?;
            api.resources.insert(key.to_string(), resource);
        }
    }

    Ok(api)
}

fn check_header(content: &str, source: &SourceContext) -> Result<()> {
    let first_line = content
        .trim_start_matches('\u{feff}')
        .lines()
        .next()
        .unwrap_or_default();
    if first_line.trim_start().starts_with(HEADER) {
        return Ok(());
    }
    Err(source.validation_error(
        format!("missing '{}' header on the first line", HEADER),
        Some(SourceSpan::from((0, first_line.len()))),
    ))
}

fn parse_resource(ctx: &ParseContext<'_>, segment: &str, value: &Value) -> Result<Resource> {
    let mut resource = Resource::new(segment);
    let map = match value {
        Value::Null => return Ok(resource),
        Value::Mapping(map) => map,
        _ => {
            return Err(ctx.error(format!(
                "resource '{}' must be a mapping",
                ctx.resource_path()
            )));
        }
    };

    for (key, value) in map {
        let key = ctx.key(key)?;
        match key {
            "displayName" => resource.display_name = Some(ctx.push(key).scalar(value, key)?),
            "description" => resource.description = Some(ctx.push(key).scalar(value, key)?),
            "uriParameters" => {
                resource.uri_parameters = parse_parameters(&ctx.push(key), value, true)?
            }
            child if child.starts_with('/') => {
                let nested = parse_resource(&ctx.push(child), child, value)?;
                resource.children.insert(child.to_string(), nested);
            }
            other => {
                if let Some(verb) = Verb::from_key(other) {
                    let method = parse_method(&ctx.push(other), verb, value)?;
                    resource.methods.insert(verb, method);
                }
            }
        }
    }

    Ok(resource)
}

fn parse_method(ctx: &ParseContext<'_>, verb: Verb, value: &Value) -> Result<Method> {
    let raw: RawMethod = match value {
        // `get:` with an empty body still declares the method
        Value::Null => RawMethod::default(),
        _ => serde_yaml::from_value(value.clone()).map_err(|e| {
            ctx.error(format!(
                "invalid {} method on resource '{}': {}",
                verb,
                ctx.resource_path(),
                e
            ))
        })?,
    };

    let query_parameters = match raw.query_parameters {
        Some(params) => resolve_parameters(params, false),
        None => IndexMap::new(),
    };

    Ok(Method {
        verb,
        display_name: raw.display_name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        query_parameters,
    })
}

fn parse_parameters(
    ctx: &ParseContext<'_>,
    value: &Value,
    default_required: bool,
) -> Result<IndexMap<String, NamedParameter>> {
    let raw: Option<RawParameters> = serde_yaml::from_value(value.clone()).map_err(|e| {
        ctx.error(format!(
            "invalid uriParameters on resource '{}': {}",
            ctx.resource_path(),
            e
        ))
    })?;
    Ok(raw
        .map(|params| resolve_parameters(params, default_required))
        .unwrap_or_default())
}

fn resolve_parameters(
    params: RawParameters,
    default_required: bool,
) -> IndexMap<String, NamedParameter> {
    params
        .into_iter()
        .map(|(name, raw)| {
            let param = match raw {
                None => RawParameter::default().resolve(default_required),
                Some(RawParameterValue::Kind(kind)) => RawParameter {
                    kind: Some(kind),
                    ..RawParameter::default()
                }
                .resolve(default_required),
                Some(RawParameterValue::Full(raw)) => raw.resolve(default_required),
            };
            (name, param)
        })
        .collect()
}

type RawParameters = IndexMap<String, Option<RawParameterValue>>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMethod {
    display_name: Option<String>,
    description: Option<String>,
    query_parameters: Option<RawParameters>,
}

/// A parameter is either a full declaration or just its type name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawParameterValue {
    Kind(String),
    Full(RawParameter),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParameter {
    display_name: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    pattern: Option<String>,
    required: Option<bool>,
}

impl RawParameter {
    /// RAML makes URI parameters required and query parameters optional unless stated.
    fn resolve(self, default_required: bool) -> NamedParameter {
        let defaults = NamedParameter::default();
        NamedParameter {
            display_name: self.display_name,
            description: self.description,
            kind: self.kind.unwrap_or(defaults.kind),
            pattern: self.pattern,
            required: self.required.unwrap_or(default_required),
        }
    }
}

/// Parsing context that carries the source and the key path being read.
///
/// The path is used both for messages and to locate the offending key in the
/// source text, one key at a time, so `/users` → `/{id}` → `get` points at the
/// `get:` under the right resource rather than the first one in the file.
#[derive(Debug, Clone)]
struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    fn push<'b>(&self, segment: &'b str) -> ParseContext<'b>
    where
        'a: 'b,
    {
        let mut path: Vec<&'b str> = self.path.clone();
        path.push(segment);
        ParseContext {
            source: self.source,
            path,
        }
    }

    /// Full route path of the resource being read (segments joined as-is).
    fn resource_path(&self) -> String {
        self.path
            .iter()
            .filter(|segment| segment.starts_with('/'))
            .copied()
            .collect()
    }

    fn span(&self) -> Option<SourceSpan> {
        let src = self.source.src();
        let mut offset = 0;
        let mut span = None;
        for key in &self.path {
            let needle = format!("{}:", key);
            let pos = offset + src[offset..].find(&needle)?;
            span = Some(SourceSpan::from((pos, key.len())));
            offset = pos + needle.len();
        }
        span
    }

    fn error(&self, message: impl Into<String>) -> Box<Error> {
        self.source.validation_error(message, self.span())
    }

    fn key<'v>(&self, key: &'v Value) -> Result<&'v str> {
        key.as_str()
            .ok_or_else(|| self.error(format!("expected a string key, found {:?}", key)))
    }

    fn scalar(&self, value: &Value, field: &str) -> Result<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(self.error(format!("field '{}' must be a scalar value", field))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ApiDefinition {
        ApiDefinition::from_str(content).expect("Failed to parse RAML")
    }

    fn parse_err(content: &str) -> Box<Error> {
        ApiDefinition::from_str(content).expect_err("expected parse failure")
    }

    #[test]
    fn test_minimal_document() {
        let api = parse(
            r#"#%RAML 0.8
title: Test API
version: v1
baseUri: http://localhost/{version}
"#,
        );
        assert_eq!(api.title, "Test API");
        assert_eq!(api.version.as_deref(), Some("v1"));
        assert_eq!(api.base_uri.as_deref(), Some("http://localhost/{version}"));
        assert!(api.resources.is_empty());
    }

    #[test]
    fn test_methods_and_descriptions() {
        let api = parse(
            r#"#%RAML 0.8
title: Test API
/test:
  displayName: Test resource
  get:
    displayName: Get me
    description: Fetch the test resource
  post:
    displayName: Post me
"#,
        );
        let test = api.resources.get("/test").unwrap();
        assert_eq!(test.display_name.as_deref(), Some("Test resource"));
        assert_eq!(test.methods.len(), 2);
        let get = test.method(Verb::Get).unwrap();
        assert_eq!(get.display_name, "Get me");
        assert_eq!(get.description, "Fetch the test resource");
        assert_eq!(test.method(Verb::Post).unwrap().description, "");
    }

    #[test]
    fn test_empty_method_body_is_declared() {
        let api = parse(
            r#"#%RAML 0.8
title: Test API
/test:
  delete:
"#,
        );
        let method = api.resources["/test"].method(Verb::Delete).unwrap();
        assert_eq!(method.display_name, "");
        assert!(method.query_parameters.is_empty());
    }

    #[test]
    fn test_uri_parameter_defaults_to_required() {
        let api = parse(
            r#"#%RAML 0.8
title: Test API
/{foo}:
  uriParameters:
    foo:
      pattern: "[a-z]"
  get:
    displayName: Get foo
    queryParameters:
      page:
        type: integer
      q:
"#,
        );
        let foo = &api.resources["/{foo}"];
        let param = &foo.uri_parameters["foo"];
        assert!(param.required);
        assert_eq!(param.kind, "string");
        assert_eq!(param.pattern.as_deref(), Some("[a-z]"));

        let query = &foo.method(Verb::Get).unwrap().query_parameters;
        assert_eq!(query["page"].kind, "integer");
        assert!(!query["page"].required);
        assert_eq!(query["q"].kind, "string");
    }

    #[test]
    fn test_parameter_type_shorthand() {
        let api = parse(
            r#"#%RAML 1.0
title: Test API
/items:
  get:
    displayName: List items
    queryParameters:
      limit: integer
"#,
        );
        let query = &api.resources["/items"].method(Verb::Get).unwrap().query_parameters;
        assert_eq!(query["limit"].kind, "integer");
    }

    #[test]
    fn test_uri_parameters_keep_declaration_order() {
        let api = parse(
            r#"#%RAML 0.8
title: Test API
/{z}/{a}:
  uriParameters:
    z:
      type: string
    a:
      type: string
"#,
        );
        let keys: Vec<&str> = api.resources["/{z}/{a}"]
            .uri_parameters
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_nested_resources() {
        let api = parse(
            r#"#%RAML 0.8
title: Test API
/users:
  get:
    displayName: List users
  /{id}:
    get:
      displayName: Get user
    /posts:
      get:
        displayName: List posts
"#,
        );
        let users = &api.resources["/users"];
        let user = &users.children["/{id}"];
        assert!(user.children.contains_key("/posts"));
        assert_eq!(api.method_count(), 3);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let api = parse(
            r#"#%RAML 0.8
title: Test API
schemas:
  - user: "{}"
/users:
  type: collection
  is: [paged]
  options:
    displayName: Preflight
  get:
    displayName: List users
    responses:
      200:
        body:
          application/json:
"#,
        );
        let users = &api.resources["/users"];
        assert_eq!(users.methods.len(), 1);
    }

    #[test]
    fn test_missing_header() {
        let err = parse_err("title: Test API\n");
        assert!(err.message().contains("#%RAML"));
    }

    #[test]
    fn test_missing_title() {
        let err = parse_err("#%RAML 0.8\nversion: v1\n");
        assert_eq!(err.message(), "missing required field 'title'");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = parse_err("#%RAML 0.8\ntitle: [broken\n");
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_non_mapping_resource() {
        let err = parse_err("#%RAML 0.8\ntitle: T\n/users: 42\n");
        assert_eq!(err.message(), "resource '/users' must be a mapping");
    }

    #[test]
    fn test_invalid_method_points_at_method_key() {
        let src = "#%RAML 0.8\ntitle: T\n/a:\n  get:\n    displayName: A\n/b:\n  get: 7\n";
        let err = parse_err(src);
        assert!(err.message().starts_with("invalid GET method on resource '/b'"));
        match *err {
            Error::Validation { span: Some(span), .. } => {
                let expected = src.rfind("get:").unwrap();
                assert_eq!(span.offset(), expected);
                assert_eq!(span.len(), 3);
            }
            _ => panic!("expected a located validation error"),
        }
    }
}
