//! RAML document parsing for ramlapi.
//!
//! Turns a RAML file into an [`ApiDefinition`]: a tree of [`Resource`]s, each
//! with its declared [`Method`]s and [`NamedParameter`]s. The tree is read-only
//! input for the route walker and the handler generators.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod model;
mod parse;
mod verb;

pub use error::{Error, Result, SourceContext};
pub use file::RamlFile;
pub use model::{ApiDefinition, Method, NamedParameter, Resource};
pub use parse::parse_document;
pub use verb::Verb;
