//! Handler stub generation for RAML APIs.
//!
//! [`Generator`] walks an [`ApiDefinition`](ramlapi_spec::ApiDefinition) twice in
//! the same order: once for a route map from handler names to functions, once
//! for a placeholder function per handler. Output is Go (`net/http`) or Rust.

mod format;
mod generator;
mod language;
mod templates;

pub use format::{FormatError, Formatter};
pub use generator::{GenerateOptions, GenerateReport, Generator, Rendered, SkippedHandler};
pub use language::Language;
pub use ramlapi_core::{Overwrite, WriteResult};
