use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use ramlapi::{Endpoint, lint};
use ramlapi_codegen::{Formatter, GenerateOptions, Generator, Language, Overwrite, WriteResult};
use ramlapi_spec::{ApiDefinition, RamlFile};

/// Extension trait for exiting on RAML errors with pretty formatting
trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ramlapi_spec::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "ramlgen")]
#[command(version)]
#[command(about = "Generate handler stubs and a route map from a RAML file")]
pub(crate) struct Cli {
    /// RAML file to parse
    #[arg(long, value_name = "PATH", default_value = "api.raml")]
    ramlfile: PathBuf,

    /// Filename to use for output
    #[arg(long, value_name = "PATH", default_value = "handlers_gen.go")]
    genfile: PathBuf,

    /// Target language [go, rust] (defaults to the genfile extension)
    #[arg(short, long)]
    language: Option<Language>,

    /// Print the generated source instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Print the route table and exit
    #[arg(long)]
    routes: bool,

    /// Print the route table as JSON
    #[arg(long, requires = "routes")]
    json: bool,

    /// Leave the genfile alone if it already exists
    #[arg(long)]
    skip_existing: bool,

    /// Do not run a formatter over the written file
    #[arg(long)]
    no_fmt: bool,

    /// Formatter command to run instead of the language default (e.g. "gofmt -s -w")
    #[arg(long, value_name = "COMMAND", conflicts_with = "no_fmt")]
    formatter: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let raml = RamlFile::open(&self.ramlfile).unwrap_or_exit();
        let api = raml.api();

        if self.routes {
            return self.print_routes(api);
        }

        tracing::info!("Processing API spec for {}", self.ramlfile.display());

        let endpoints = ramlapi::endpoints(&api.resources)?;
        report_lints(&endpoints);

        let generator = Generator::from_endpoints(&endpoints).language(self.language());

        if self.dry_run {
            print!("{}", generator.render()?);
            return Ok(());
        }

        let report = generator
            .generate(&self.genfile, &self.options()?)
            .wrap_err("Failed to generate handlers")?;

        for skipped in &report.skipped {
            eprintln!(
                "skipped {} ({}): {}",
                skipped.location, skipped.handler, skipped.reason
            );
        }

        match report.write {
            WriteResult::Written => {
                tracing::info!("Created handlers in {}", self.genfile.display())
            }
            WriteResult::Skipped => tracing::info!(
                "{} already exists, leaving it untouched",
                self.genfile.display()
            ),
        }

        Ok(())
    }

    fn language(&self) -> Language {
        self.language
            .unwrap_or_else(|| Language::from_path(&self.genfile))
    }

    fn options(&self) -> Result<GenerateOptions> {
        let overwrite = if self.skip_existing {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        let mut options = GenerateOptions::default()
            .overwrite(overwrite)
            .format(!self.no_fmt);

        if let Some(command) = &self.formatter {
            let formatter = Formatter::parse(command)
                .ok_or_else(|| eyre::eyre!("--formatter must name a program"))?;
            options = options.formatter(formatter);
        }
        Ok(options)
    }

    fn print_routes(&self, api: &ApiDefinition) -> Result<()> {
        let endpoints = ramlapi::endpoints(&api.resources)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&endpoints)?);
        } else {
            for endpoint in &endpoints {
                println!("{}", endpoint);
            }
        }
        Ok(())
    }
}

fn report_lints(endpoints: &[Endpoint]) {
    for diagnostic in lint::run(endpoints) {
        if diagnostic.severity.is_warning() {
            tracing::warn!("{}", diagnostic);
        } else {
            tracing::debug!("{}", diagnostic);
        }
    }
}
