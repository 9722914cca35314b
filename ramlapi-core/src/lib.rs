//! Core utilities shared across the ramlapi crates.
//!
//! Identifier normalisation used by both the route walker and the handler
//! generators, plus the file writer for generated sources.

mod file;
mod naming;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Identifier helpers
pub use naming::{is_identifier, variableize};
