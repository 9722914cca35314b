//! Turn a RAML resource tree into router-ready endpoints.
//!
//! [`build`] walks the tree depth-first and hands one [`Endpoint`] per declared
//! method to a caller supplied [`EndpointSink`]. The sink decides what to do with
//! it: register a route, collect it, or feed a code generator.
//!
//! ```
//! use ramlapi::{Endpoint, build};
//! use ramlapi_spec::{ApiDefinition, Method, Resource, Verb};
//!
//! let api = ApiDefinition::new("Example")
//!     .with_resource(Resource::new("/test").with_method(Method::new(Verb::Get, "Get me")));
//!
//! let mut routes = Vec::new();
//! build(&api.resources, &mut |endpoint: Endpoint| routes.push(endpoint.to_string()))?;
//! assert_eq!(routes, vec!["verb: GET handler: GetMe path: /test"]);
//! # Ok::<(), ramlapi::Error>(())
//! ```

mod endpoint;
mod error;
pub mod lint;
mod walker;

pub use endpoint::{Endpoint, Parameter};
pub use error::{Error, Result};
pub use ramlapi_spec::Verb;
pub use walker::{EndpointSink, build, endpoints};
