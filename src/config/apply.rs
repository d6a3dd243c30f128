use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{BenchArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the command
/// line or through the environment win over the file.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(
    args: &mut BenchArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "target")
        && let Some(target) = config.target.clone()
    {
        args.target = Some(target);
    }

    if !is_explicit(matches, "protocol")
        && let Some(protocol) = config.protocol
    {
        args.protocol = protocol;
    }

    if !is_explicit(matches, "concurrency")
        && let Some(value) = config.concurrency
    {
        args.concurrency = ensure_positive_usize(value, "concurrency")?;
    }

    if !is_explicit(matches, "requests")
        && let Some(value) = config.requests
    {
        args.requests = ensure_positive_usize(value, "requests")?;
    }

    if !is_explicit(matches, "probe_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        let timeout = timeout
            .to_duration()
            .map_err(|err| AppError::config(ConfigError::InvalidTimeout { source: err }))?;
        args.probe_timeout = Some(timeout);
    }

    if !is_explicit(matches, "strict_tls")
        && let Some(value) = config.strict_tls
    {
        args.strict_tls = value;
    }

    if !is_explicit(matches, "verbose")
        && let Some(value) = config.verbose
    {
        args.verbose = value;
    }

    if !is_explicit(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive { field, source: err })
    })
}
