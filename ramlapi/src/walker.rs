//! Depth-first traversal of the resource tree.

use std::collections::BTreeMap;

use ramlapi_core::variableize;
use ramlapi_spec::{Method, Resource};

use crate::{Endpoint, Error, Parameter, Result};

/// Receives endpoints as the walker produces them.
pub trait EndpointSink {
    fn accept(&mut self, endpoint: Endpoint);
}

impl<F> EndpointSink for F
where
    F: FnMut(Endpoint),
{
    fn accept(&mut self, endpoint: Endpoint) {
        self(endpoint)
    }
}

/// Walk every resource and hand one [`Endpoint`] per declared method to `sink`.
///
/// Siblings are visited in key order and methods in verb order, so two walks of
/// the same tree deliver the same sequence. The walk stops at the first method
/// without a display name; endpoints delivered before that point stay delivered.
pub fn build<S>(resources: &BTreeMap<String, Resource>, sink: &mut S) -> Result<()>
where
    S: EndpointSink + ?Sized,
{
    for (segment, resource) in resources {
        visit("", segment, resource, &[], sink)?;
    }
    Ok(())
}

/// Collect the walk into a vector.
pub fn endpoints(resources: &BTreeMap<String, Resource>) -> Result<Vec<Endpoint>> {
    let mut collected = Vec::new();
    build(resources, &mut |endpoint: Endpoint| collected.push(endpoint))?;
    Ok(collected)
}

fn visit<S>(
    parent_path: &str,
    segment: &str,
    resource: &Resource,
    inherited: &[Parameter],
    sink: &mut S,
) -> Result<()>
where
    S: EndpointSink + ?Sized,
{
    let path = format!("{}{}", parent_path, segment);

    let mut params = inherited.to_vec();
    params.extend(
        resource
            .uri_parameters
            .iter()
            .map(|(key, param)| Parameter::from_named(key, param)),
    );

    for method in resource.methods.values() {
        let endpoint = endpoint_for(&path, method, &params)?;
        tracing::debug!(%endpoint, "endpoint");
        sink.accept(endpoint);
    }

    for (child_segment, child) in &resource.children {
        visit(&path, child_segment, child, &params, sink)?;
    }

    Ok(())
}

fn endpoint_for(path: &str, method: &Method, params: &[Parameter]) -> Result<Endpoint> {
    if method.display_name.is_empty() {
        return Err(Error::MissingHandlerName {
            path: path.to_string(),
            verb: method.verb,
        });
    }

    let mut query_parameters: Vec<Parameter> = method
        .query_parameters
        .iter()
        .map(|(key, param)| Parameter::from_named(key, param))
        .collect();
    query_parameters.sort_by(|a, b| a.key.cmp(&b.key));

    Ok(Endpoint {
        verb: method.verb,
        handler: variableize(&method.display_name),
        path: path.to_string(),
        description: method.description.clone(),
        uri_parameters: params.to_vec(),
        query_parameters,
    })
}
