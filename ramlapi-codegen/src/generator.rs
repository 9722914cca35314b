use std::path::Path;

use eyre::{Result, WrapErr};
use minijinja::{Environment, context};
use ramlapi::Endpoint;
use ramlapi_core::{File, Overwrite, WriteResult, is_identifier};
use ramlapi_spec::ApiDefinition;
use serde::Serialize;

use crate::{
    Formatter, Language,
    templates::{HANDLER, HEADER, MAP_END, MAP_ENTRY, MAP_START},
};

/// A handler left out of the generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedHandler {
    pub handler: String,
    /// Verb and path of the endpoint, e.g. `GET /users`
    pub location: String,
    pub reason: String,
}

/// Rendered source plus what went into it.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub source: String,
    /// Number of endpoints the walk produced
    pub endpoints: usize,
    /// Handlers that got a stub, in output order
    pub handlers: Vec<String>,
    pub skipped: Vec<SkippedHandler>,
}

/// How [`Generator::generate`] writes and formats its output.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub overwrite: Overwrite,
    /// Run a formatter over the written file
    pub format: bool,
    /// Formatter to use instead of the language default
    pub formatter: Option<Formatter>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            format: true,
            formatter: None,
        }
    }
}

impl GenerateOptions {
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }
}

/// Outcome of writing a generated file.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub endpoints: usize,
    pub handlers: Vec<String>,
    pub skipped: Vec<SkippedHandler>,
    pub write: WriteResult,
    /// True only when the formatter ran and succeeded
    pub formatted: bool,
}

/// What the generator renders from.
enum Input<'a> {
    /// Walked on every render
    Api(&'a ApiDefinition),
    /// Already walked by the caller
    Endpoints(&'a [Endpoint]),
}

/// Renders a route map and handler stubs for every endpoint of an API.
pub struct Generator<'a> {
    input: Input<'a>,
    language: Language,
}

impl<'a> Generator<'a> {
    pub fn new(api: &'a ApiDefinition) -> Self {
        Self {
            input: Input::Api(api),
            language: Language::default(),
        }
    }

    /// Render endpoints the caller already collected with [`ramlapi::endpoints`].
    pub fn from_endpoints(endpoints: &'a [Endpoint]) -> Self {
        Self {
            input: Input::Endpoints(endpoints),
            language: Language::default(),
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Render the complete source file.
    pub fn render(&self) -> Result<String> {
        Ok(self.render_all()?.source)
    }

    /// Render the source file and report which handlers made it in.
    ///
    /// A missing display name fails the whole render. Handlers whose name is
    /// not a usable identifier, or whose template fails to render, are logged
    /// and skipped so the rest of the file is still produced.
    pub fn render_all(&self) -> Result<Rendered> {
        let walked;
        let endpoints = match self.input {
            Input::Api(api) => {
                walked = ramlapi::endpoints(&api.resources)?;
                walked.as_slice()
            }
            Input::Endpoints(endpoints) => endpoints,
        };
        let env = self
            .language
            .templates()
            .environment()
            .wrap_err_with(|| format!("failed to load {} templates", self.language))?;

        let mut skipped = Vec::new();
        let mut selected = Vec::with_capacity(endpoints.len());
        for endpoint in endpoints {
            match self.check_name(&endpoint.handler) {
                Ok(()) => selected.push(endpoint),
                Err(reason) => {
                    tracing::warn!(handler = %endpoint.handler, %reason, "skipping handler");
                    skipped.push(SkippedHandler::new(endpoint, reason));
                }
            }
        }

        // Pass 1: route map
        let mut source = render_fixed(&env, HEADER)?;
        source.push_str(&render_fixed(&env, MAP_START)?);
        for endpoint in &selected {
            match render_endpoint(&env, MAP_ENTRY, endpoint) {
                Ok(text) => source.push_str(&text),
                Err(e) => {
                    tracing::warn!(handler = %endpoint.handler, error = %e, "failed to render route map entry")
                }
            }
        }
        source.push_str(&render_fixed(&env, MAP_END)?);

        // Pass 2: handler stubs
        let mut handlers = Vec::with_capacity(selected.len());
        for endpoint in &selected {
            match render_endpoint(&env, HANDLER, endpoint) {
                Ok(text) => {
                    source.push_str(&text);
                    handlers.push(endpoint.handler.clone());
                }
                Err(e) => {
                    tracing::warn!(handler = %endpoint.handler, error = %e, "failed to render handler");
                    skipped.push(SkippedHandler::new(endpoint, e.to_string()));
                }
            }
        }

        tracing::debug!(
            language = %self.language,
            handlers = handlers.len(),
            skipped = skipped.len(),
            "rendered handler file"
        );

        Ok(Rendered {
            source,
            endpoints: endpoints.len(),
            handlers,
            skipped,
        })
    }

    /// Render, write to `path` and format the result.
    ///
    /// Formatting is best-effort: a missing or failing formatter is logged and
    /// the unformatted file is kept.
    pub fn generate(
        &self,
        path: impl AsRef<Path>,
        options: &GenerateOptions,
    ) -> Result<GenerateReport> {
        let path = path.as_ref();
        let Rendered {
            source,
            endpoints,
            handlers,
            skipped,
        } = self.render_all()?;

        let write = File::new(path, source)
            .overwrite(options.overwrite)
            .write()
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;

        let formatted = match write {
            WriteResult::Written if options.format => self.format(path, options),
            WriteResult::Written => false,
            WriteResult::Skipped => {
                tracing::debug!(path = %path.display(), "file exists, left untouched");
                false
            }
        };

        Ok(GenerateReport {
            endpoints,
            handlers,
            skipped,
            write,
            formatted,
        })
    }

    fn format(&self, path: &Path, options: &GenerateOptions) -> bool {
        let formatter = options
            .formatter
            .clone()
            .unwrap_or_else(|| self.language.formatter());

        match formatter.run(path) {
            Ok(()) => {
                tracing::debug!(formatter = %formatter.command_line(), "formatted output");
                true
            }
            Err(e) => {
                tracing::warn!(
                    formatter = %formatter.command_line(),
                    error = %e,
                    "formatting failed, keeping unformatted output"
                );
                false
            }
        }
    }

    fn check_name(&self, name: &str) -> std::result::Result<(), String> {
        if name.is_empty() {
            return Err("display name has no ASCII letters or digits".to_string());
        }
        if !is_identifier(name) {
            return Err(format!("'{}' does not start with a letter", name));
        }
        if self.language.is_reserved(name) {
            return Err(format!("'{}' is reserved in {}", name, self.language));
        }
        Ok(())
    }
}

impl SkippedHandler {
    fn new(endpoint: &Endpoint, reason: impl Into<String>) -> Self {
        Self {
            handler: endpoint.handler.clone(),
            location: format!("{} {}", endpoint.verb, endpoint.path),
            reason: reason.into(),
        }
    }
}

fn render_fixed(env: &Environment<'_>, name: &str) -> Result<String> {
    env.get_template(name)
        .and_then(|template| template.render(context! {}))
        .wrap_err_with(|| format!("failed to render {} template", name))
}

fn render_endpoint(
    env: &Environment<'_>,
    name: &str,
    endpoint: &Endpoint,
) -> std::result::Result<String, minijinja::Error> {
    env.get_template(name)?.render(context! {
        name => &endpoint.handler,
        verb => endpoint.verb.as_str(),
        path => comment_line(&endpoint.path),
        doc => doc_lines(&endpoint.description),
    })
}

/// Split a description into comment lines.
///
/// Every line break style ends a line, including a lone `\r` which rustc
/// rejects inside doc comments. Other control characters become spaces.
fn doc_lines(description: &str) -> Vec<String> {
    let normalized: String = description
        .replace("\r\n", "\n")
        .chars()
        .map(|c| match c {
            '\r' => '\n',
            '\n' | '\t' => c,
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();
    normalized
        .trim()
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Flatten text onto one comment line.
fn comment_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
