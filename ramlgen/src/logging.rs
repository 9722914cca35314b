use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` wins over `-v` flags.
pub(crate) fn init(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            // status lines and warnings only
            0 => "warn,ramlgen=info".to_string(),
            1 => "info,ramlapi=debug,ramlapi_codegen=debug,ramlgen=debug".to_string(),
            _ => "debug,ramlapi=trace,ramlapi_codegen=trace,ramlgen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose > 0)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
