use std::time::Duration;

use crate::dispatch::HeaderDump;
use crate::domain::RunConfig;
use crate::metrics::Aggregate;

/// Nanoseconds per millisecond.
const NS_PER_MS: u128 = 1_000_000;
/// Milliseconds per second.
const MS_PER_SEC: u128 = 1_000;

pub(crate) fn benchmarking_line(config: &RunConfig) -> String {
    format!("Benchmarking {} (be patient).....", config.target_input())
}

/// `Name: [v1 v2]`, one line per header.
pub(crate) fn header_lines(dump: &HeaderDump) -> Vec<String> {
    dump.entries
        .iter()
        .map(|(name, values)| format!("{}: [{}]", name, values.join(" ")))
        .collect()
}

pub(crate) fn summary_lines(aggregate: &Aggregate, config: &RunConfig) -> Vec<String> {
    vec![
        String::new(),
        String::new(),
        format!("Total requests: {}", aggregate.total_requests),
        format!("Concurrency Level: {}", config.concurrency()),
        format!("Completed requests: {}", aggregate.completed),
        format!("Incomplete requests: {}", aggregate.incomplete),
        format!(
            "Time per request: {}s",
            format_seconds(aggregate.mean_latency)
        ),
    ]
}

/// Seconds with three decimals, rounded half up to the millisecond.
pub(crate) fn format_seconds(value: Duration) -> String {
    let millis = value
        .as_nanos()
        .saturating_add(NS_PER_MS / 2)
        .checked_div(NS_PER_MS)
        .unwrap_or(0);
    let secs = millis.checked_div(MS_PER_SEC).unwrap_or(0);
    let fraction = millis.checked_rem(MS_PER_SEC).unwrap_or(0);
    format!("{}.{:03}", secs, fraction)
}
