use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for ramlapi-spec operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the document text and its filename together so every error can point
/// back into the original RAML.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a YAML error.
    pub fn parse_error(&self, source: serde_yaml::Error) -> Box<Error> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from((loc.index(), 1)));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(ramlapi::io_error),
        help("pass the RAML document with --ramlfile <path>")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse RAML document")]
    #[diagnostic(code(ramlapi::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(ramlapi::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Returns the human readable message without source context.
    pub fn message(&self) -> String {
        match self {
            Error::Io { path, source } => format!("failed to read '{}': {}", path.display(), source),
            Error::Parse { source, .. } => format!("failed to parse RAML document: {}", source),
            Error::Validation { message, .. } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_span() {
        let ctx = SourceContext::new("#%RAML 0.8\n", "api.raml");
        let err = ctx.validation_error("missing required field 'title'", Some((0, 10).into()));
        match *err {
            Error::Validation { span, ref message, .. } => {
                assert_eq!(span, Some(SourceSpan::from((0, 10))));
                assert_eq!(message, "missing required field 'title'");
            }
            _ => panic!("expected validation error"),
        }
    }

    #[test]
    fn test_parse_error_points_at_location() {
        let src = "#%RAML 0.8\ntitle: [unclosed\n";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(src).unwrap_err();
        let ctx = SourceContext::new(src, "api.raml");
        let err = ctx.parse_error(yaml_err);
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
        assert!(err.message().starts_with("failed to parse RAML document"));
    }

    #[test]
    fn test_accessors() {
        let ctx = SourceContext::new("body", "api.raml");
        assert_eq!(ctx.src(), "body");
        assert_eq!(ctx.filename(), "api.raml");
    }
}
