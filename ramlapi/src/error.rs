use ramlapi_spec::Verb;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A declared method has no display name to derive a handler from.
    #[error("missing handler name: {verb} {path} has no displayName")]
    MissingHandlerName { path: String, verb: Verb },
}
