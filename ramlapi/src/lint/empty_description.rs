//! Lint for endpoints without a description.

use super::{Diagnostic, Lint};
use crate::Endpoint;

/// Notes endpoints whose method has no description; their stubs get a bare doc comment.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Report endpoints without a description"
    }

    fn check(&self, endpoints: &[Endpoint], diagnostics: &mut Vec<Diagnostic>) {
        for endpoint in endpoints {
            if endpoint.description.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::info(
                        self.name(),
                        format!("handler '{}' has no description", endpoint.handler),
                    )
                    .at(format!("{} {}", endpoint.verb, endpoint.path)),
                );
            }
        }
    }
}
