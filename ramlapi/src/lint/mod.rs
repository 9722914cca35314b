//! Non-blocking checks over a walked endpoint list.
//!
//! Lints report problems the walker tolerates, such as two resources producing
//! the same handler name. They never stop generation; callers decide what to
//! print.

mod diagnostic;
mod duplicate_handler;
mod empty_description;

pub use diagnostic::{Diagnostic, Severity};
pub use duplicate_handler::DuplicateHandlerLint;
pub use empty_description::EmptyDescriptionLint;

use crate::Endpoint;

/// A check over the endpoints produced by a walk.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the endpoints and add any diagnostics.
    fn check(&self, endpoints: &[Endpoint], diagnostics: &mut Vec<Diagnostic>);
}

/// The built-in lints, in the order they run.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![Box::new(DuplicateHandlerLint), Box::new(EmptyDescriptionLint)]
}

/// Run the built-in lints.
pub fn run(endpoints: &[Endpoint]) -> Vec<Diagnostic> {
    run_with(&default_lints(), endpoints)
}

/// Run a custom set of lints.
pub fn run_with(lints: &[Box<dyn Lint>], endpoints: &[Endpoint]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in lints {
        lint.check(endpoints, &mut diagnostics);
    }
    diagnostics
}
