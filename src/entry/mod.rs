//! Process entry point: arguments, logging, runtime.
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use crate::app::run_local;
use crate::args::BenchArgs;
use crate::config::{apply_config, load_config};
use crate::domain::{RunConfig, TlsPolicy};
use crate::error::{AppError, AppResult, ValidationError};
use crate::system::{banner, logger};

/// Runs the CLI. Exits through clap on malformed arguments; returns an error
/// for invalid configuration and for failures of the dispatcher itself.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or the run cannot
/// complete.
pub fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    let configured = merge_config_file(&mut args, &matches);

    logger::init_logging(args.verbose, args.no_color);
    banner::print_cli_banner(args.no_color);

    let config = configured
        .and_then(|()| build_run_config(&args))
        .map_err(report_usage_error)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_local(config))?;
    Ok(())
}

fn parse_args() -> AppResult<(BenchArgs, ArgMatches)> {
    let matches = BenchArgs::command().get_matches_from(std::env::args_os());
    let args = BenchArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn merge_config_file(args: &mut BenchArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, &config)?;
    }
    Ok(())
}

pub(crate) fn build_run_config(args: &BenchArgs) -> AppResult<RunConfig> {
    let target = args
        .target
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingTarget))?;
    Ok(
        RunConfig::parse(args.protocol, target, args.concurrency, args.requests)?
            .with_probe_timeout(args.probe_timeout)
            .with_tls_policy(TlsPolicy::from_strict(args.strict_tls)),
    )
}

fn report_usage_error(err: AppError) -> AppError {
    if err.is_usage_error() {
        error!("{}", err);
        eprintln!("{}", BenchArgs::command().render_usage());
    }
    err
}
