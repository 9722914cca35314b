//! Template sources for each target language.
//!
//! Every set renders the same five pieces in order: a header, the route map
//! (start, one entry per handler, end) and one stub per handler. Entry and
//! stub templates receive `name`, `verb`, `path` and `doc` (description lines).

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

pub(crate) const HEADER: &str = "header";
pub(crate) const MAP_START: &str = "map_start";
pub(crate) const MAP_ENTRY: &str = "map_entry";
pub(crate) const MAP_END: &str = "map_end";
pub(crate) const HANDLER: &str = "handler";

pub(crate) struct TemplateSet {
    header: &'static str,
    map_start: &'static str,
    map_entry: &'static str,
    map_end: &'static str,
    handler: &'static str,
}

impl TemplateSet {
    /// Build an environment holding this set's templates.
    pub(crate) fn environment(&self) -> Result<Environment<'static>, minijinja::Error> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template(HEADER, self.header)?;
        env.add_template(MAP_START, self.map_start)?;
        env.add_template(MAP_ENTRY, self.map_entry)?;
        env.add_template(MAP_END, self.map_end)?;
        env.add_template(HANDLER, self.handler)?;
        Ok(env)
    }
}

pub(crate) static GO: TemplateSet = TemplateSet {
    header: r#"// Code generated by ramlgen. Handler bodies are placeholders.

package main

import (
	"encoding/json"
	"net/http"
)
"#,
    map_start: r#"
// RouteMap links handler names from the RAML document to handler funcs.
var RouteMap = map[string]http.HandlerFunc{
"#,
    map_entry: "\t\"{{ name }}\": {{ name }},\n",
    map_end: "}\n",
    handler: r#"
// {{ name }} handles the URI {{ path }} and the action {{ verb }}.
{% for line in doc %}//{% if line %} {{ line }}{% endif %}
{% endfor %}func {{ name }}(w http.ResponseWriter, r *http.Request) {
	json, _ := json.Marshal(map[string]string{
		"message": "{{ name }}{{ verb }}",
	})
	w.Write(json)
}
"#,
};

pub(crate) static RUST: TemplateSet = TemplateSet {
    header: r#"//! Code generated by ramlgen. Handler bodies are placeholders.

#![allow(non_snake_case)]

use std::collections::HashMap;

/// Signature shared by every generated handler.
pub type Handler = fn(&HashMap<String, String>) -> String;
"#,
    map_start: r#"
/// Links handler names from the RAML document to handler functions.
pub fn route_map() -> HashMap<&'static str, Handler> {
    let mut routes: HashMap<&'static str, Handler> = HashMap::new();
"#,
    map_entry: "    routes.insert(\"{{ name }}\", {{ name }});\n",
    map_end: "    routes\n}\n",
    handler: r##"
/// Handles the URI `{{ path }}` and the action {{ verb }}.
{% for line in doc %}///{% if line %} {{ line }}{% endif %}
{% endfor %}pub fn {{ name }}(_params: &HashMap<String, String>) -> String {
    String::from(r#"{"message":"{{ name }}{{ verb }}"}"#)
}
"##,
};

#[cfg(test)]
mod tests {
    use minijinja::context;

    use super::*;

    #[test]
    fn test_sets_compile() {
        GO.environment().unwrap();
        RUST.environment().unwrap();
    }

    #[test]
    fn test_handler_doc_lines() {
        let env = GO.environment().unwrap();
        let out = env
            .get_template(HANDLER)
            .unwrap()
            .render(context! {
                name => "GetMe",
                verb => "GET",
                path => "/me",
                doc => vec!["Fetch me.", "", "Twice."],
            })
            .unwrap();
        assert!(out.contains(
            "// GetMe handles the URI /me and the action GET.\n// Fetch me.\n//\n// Twice.\nfunc GetMe("
        ));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let env = RUST.environment().unwrap();
        let result = env.get_template(MAP_ENTRY).unwrap().render(context! {});
        assert!(result.is_err());
    }
}
