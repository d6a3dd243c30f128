use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter variables, first match wins.
const FILTER_ENV_VARS: [&str; 2] = ["LOADPROBE_LOG", "RUST_LOG"];

/// Logs go to stderr so stdout carries only the report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let configured = FILTER_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose, configured.as_deref()))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// An explicit directive beats `--verbose`; a malformed one falls back to `info`.
fn log_filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
    match configured {
        Some(directives) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_err| EnvFilter::new("info"))
        }
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}
