use std::time::Duration;

use super::types::{Aggregate, ProbeResult};

/// Folds probe results into counts and a mean latency.
///
/// The mean covers every probe, failed ones included.
#[must_use]
pub fn summarize(results: &[ProbeResult]) -> Aggregate {
    let total_requests = results.len();
    let completed = results.iter().filter(|result| result.succeeded).count();
    let total_elapsed_ns = results.iter().fold(0_u128, |acc, result| {
        acc.saturating_add(result.elapsed.as_nanos())
    });

    let mean_ns = u128::try_from(total_requests)
        .ok()
        .and_then(|count| total_elapsed_ns.checked_div(count))
        .unwrap_or(0);
    let mean_latency = Duration::from_nanos(u64::try_from(mean_ns).unwrap_or(u64::MAX));

    Aggregate {
        total_requests,
        completed,
        incomplete: total_requests.saturating_sub(completed),
        mean_latency,
    }
}
