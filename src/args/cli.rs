use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS};
use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::{PositiveUsize, Protocol};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal async load generator - fires N HTTP GET or TCP connect probes with bounded concurrency and reports completion counts and mean latency.",
    next_help_heading = "Advanced Options"
)]
pub struct BenchArgs {
    /// Maximum number of probes in flight at once
    #[arg(
        long = "concurrency",
        short = 'c',
        default_value_t = DEFAULT_CONCURRENCY,
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub concurrency: PositiveUsize,

    /// Total number of probes to run
    #[arg(
        long = "requests",
        short = 'n',
        default_value_t = DEFAULT_REQUESTS,
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub requests: PositiveUsize,

    /// Target URL (http) or host:port (tcp)
    #[arg(
        long = "target",
        short = 't',
        env = "LOADPROBE_TARGET",
        help_heading = "Common Options"
    )]
    pub target: Option<String>,

    /// Protocol to benchmark
    #[arg(
        long = "protocol",
        short = 'p',
        default_value = "http",
        value_enum,
        ignore_case = true,
        help_heading = "Common Options"
    )]
    pub protocol: Protocol,

    /// Per-probe timeout (e.g. 500ms, 5s, 1m); unbounded when unset
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub probe_timeout: Option<Duration>,

    /// Verify TLS certificates (skipped by default)
    #[arg(long = "strict-tls")]
    pub strict_tls: bool,

    /// Path to a TOML or JSON config file
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
