//! Target languages for generated handler files.

use std::{fmt, path::Path, str::FromStr};

use crate::{Formatter, templates::TemplateSet};

/// A language the generator can emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// `net/http` handlers and a `RouteMap` of `http.HandlerFunc`s
    #[default]
    Go,
    /// Plain functions and a `route_map()` returning a `HashMap`
    Rust,
}

const GO_RESERVED: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
    // declared by the generated file itself or its imports
    "RouteMap", "json", "http", "main", "init", "string",
];

const RUST_RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    // declared by the generated file itself
    "route_map",
];

impl Language {
    pub const ALL: [Language; 2] = [Language::Go, Language::Rust];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rs",
        }
    }

    /// Pick the language from an output path's extension, falling back to Go.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("rs") => Language::Rust,
            _ => Language::Go,
        }
    }

    /// Words a handler may not be named.
    pub fn reserved_words(&self) -> &'static [&'static str] {
        match self {
            Language::Go => GO_RESERVED,
            Language::Rust => RUST_RESERVED,
        }
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words().contains(&name)
    }

    /// The formatter run over a freshly written file.
    pub fn formatter(&self) -> Formatter {
        match self {
            Language::Go => Formatter::new("gofmt").arg("-w"),
            Language::Rust => Formatter::new("rustfmt").arg("--edition").arg("2021"),
        }
    }

    pub(crate) fn templates(&self) -> &'static TemplateSet {
        match self {
            Language::Go => &crate::templates::GO,
            Language::Rust => &crate::templates::RUST,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            _ => Err(format!("unknown language '{}', expected 'go' or 'rust'", s)),
        }
    }
}
