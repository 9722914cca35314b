//! Lint for handler names generated more than once.

use std::collections::HashMap;

use super::{Diagnostic, Lint};
use crate::Endpoint;

/// Warns when two endpoints share a handler name.
///
/// The generated route map keeps only the last entry for a name and the stub
/// file ends up with two functions of the same name.
pub struct DuplicateHandlerLint;

impl Lint for DuplicateHandlerLint {
    fn name(&self) -> &'static str {
        "duplicate-handler"
    }

    fn description(&self) -> &'static str {
        "Detect handler names shared by more than one endpoint"
    }

    fn check(&self, endpoints: &[Endpoint], diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &Endpoint> = HashMap::new();

        for endpoint in endpoints {
            match seen.get(endpoint.handler.as_str()) {
                Some(first) => diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "handler '{}' is generated for both {} {} and {} {}",
                            endpoint.handler, first.verb, first.path, endpoint.verb, endpoint.path
                        ),
                    )
                    .at(format!("{} {}", endpoint.verb, endpoint.path)),
                ),
                None => {
                    seen.insert(&endpoint.handler, endpoint);
                }
            }
        }
    }
}
