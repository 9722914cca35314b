//! The flattened, router-ready view of one declared method.

use std::fmt;

use ramlapi_spec::{NamedParameter, Verb};
use serde::Serialize;

/// A URI or query parameter attached to an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Declared parameter name
    pub key: String,
    /// Declared type tag, passed through untouched
    #[serde(rename = "type")]
    pub kind: String,
    /// Validation pattern as written in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub required: bool,
}

impl Parameter {
    pub fn new(key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: kind.into(),
            pattern: None,
            required: false,
        }
    }

    /// Build from a parsed parameter declaration.
    pub fn from_named(key: &str, param: &NamedParameter) -> Self {
        Self {
            key: key.to_string(),
            kind: param.kind.clone(),
            pattern: param.pattern.clone(),
            required: param.required,
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// One route: a verb on a full path, bound to a generated handler name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub verb: Verb,
    /// Handler identifier derived from the method's display name
    pub handler: String,
    /// Concatenation of every segment from the root down to this resource
    pub path: String,
    pub description: String,
    /// Parameters of this resource and all of its ancestors, root first
    pub uri_parameters: Vec<Parameter>,
    /// Parameters of this method only, sorted by key
    pub query_parameters: Vec<Parameter>,
}

impl Endpoint {
    /// Look up a URI parameter by key.
    pub fn uri_parameter(&self, key: &str) -> Option<&Parameter> {
        self.uri_parameters.iter().find(|p| p.key == key)
    }

    /// Look up a query parameter by key.
    pub fn query_parameter(&self, key: &str) -> Option<&Parameter> {
        self.query_parameters.iter().find(|p| p.key == key)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "verb: {} handler: {} path: {}",
            self.verb, self.handler, self.path
        )
    }
}
