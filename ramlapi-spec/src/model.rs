//! The resource tree produced by parsing a RAML document.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::Verb;

/// Root of a parsed RAML document.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDefinition {
    /// API title (required by RAML)
    pub title: String,
    /// API version, if declared
    pub version: Option<String>,
    /// Base URI, if declared
    pub base_uri: Option<String>,
    /// Top-level resources keyed by their path segment
    pub resources: BTreeMap<String, Resource>,
}

impl ApiDefinition {
    /// Create an empty definition with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: None,
            base_uri: None,
            resources: BTreeMap::new(),
        }
    }

    /// Add a top-level resource, keyed by its segment.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.insert(resource.segment.clone(), resource);
        self
    }

    /// Count every method declared anywhere in the tree.
    pub fn method_count(&self) -> usize {
        self.resources.values().map(Resource::method_count).sum()
    }
}

/// A node in the resource tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    /// Path fragment contributed by this node (e.g. `/users` or `/{id}`)
    pub segment: String,
    /// Resource display name
    pub display_name: Option<String>,
    /// Resource description
    pub description: Option<String>,
    /// Declared methods; a missing verb is not declared
    pub methods: BTreeMap<Verb, Method>,
    /// URI parameters declared on this node, in declaration order
    pub uri_parameters: IndexMap<String, NamedParameter>,
    /// Nested resources keyed by their segment
    pub children: BTreeMap<String, Resource>,
}

impl Resource {
    /// Create a resource with no methods, parameters or children.
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            ..Self::default()
        }
    }

    /// Declare a method, replacing any previous declaration for the same verb.
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.insert(method.verb, method);
        self
    }

    /// Declare a URI parameter.
    pub fn with_uri_parameter(mut self, name: impl Into<String>, param: NamedParameter) -> Self {
        self.uri_parameters.insert(name.into(), param);
        self
    }

    /// Nest a child resource, keyed by its segment.
    pub fn with_child(mut self, child: Resource) -> Self {
        self.children.insert(child.segment.clone(), child);
        self
    }

    /// Get the method declared for a verb.
    pub fn method(&self, verb: Verb) -> Option<&Method> {
        self.methods.get(&verb)
    }

    /// Returns true if this resource has nested resources.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Count the methods declared on this resource and all of its descendants.
    pub fn method_count(&self) -> usize {
        self.methods.len()
            + self
                .children
                .values()
                .map(Resource::method_count)
                .sum::<usize>()
    }
}

/// A method declared on a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    /// The HTTP verb this method is declared under
    pub verb: Verb,
    /// Human readable label; handler identifiers are derived from it
    pub display_name: String,
    /// Free text description, may be empty
    pub description: String,
    /// Query parameters declared on this method
    pub query_parameters: IndexMap<String, NamedParameter>,
}

impl Method {
    /// Create a method with a display name and no description or parameters.
    pub fn new(verb: Verb, display_name: impl Into<String>) -> Self {
        Self {
            verb,
            display_name: display_name.into(),
            description: String::new(),
            query_parameters: IndexMap::new(),
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a query parameter.
    pub fn with_query_parameter(mut self, name: impl Into<String>, param: NamedParameter) -> Self {
        self.query_parameters.insert(name.into(), param);
        self
    }
}

/// A named parameter (URI or query) as declared in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedParameter {
    /// Display name for documentation
    pub display_name: Option<String>,
    /// Description for documentation
    pub description: Option<String>,
    /// Declared type (`string`, `integer`, `number`, `boolean`, `date`, `file`)
    pub kind: String,
    /// Validation regular expression, kept as literal text
    pub pattern: Option<String>,
    /// Whether the parameter must be present
    pub required: bool,
}

fn default_kind() -> String {
    "string".to_string()
}

impl Default for NamedParameter {
    fn default() -> Self {
        Self {
            display_name: None,
            description: None,
            kind: default_kind(),
            pattern: None,
            required: false,
        }
    }
}

impl NamedParameter {
    /// Create an optional, unconstrained parameter of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Set the validation pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Mark the parameter as required or optional.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
