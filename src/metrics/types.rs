use std::time::Duration;

use tokio::time::Instant;

/// Outcome of a single probe. Failed probes still report the time they spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    pub succeeded: bool,
    pub elapsed: Duration,
}

impl ProbeResult {
    #[must_use]
    pub const fn success(elapsed: Duration) -> Self {
        Self {
            succeeded: true,
            elapsed,
        }
    }

    #[must_use]
    pub const fn failure(elapsed: Duration) -> Self {
        Self {
            succeeded: false,
            elapsed,
        }
    }

    /// Measures from `start` to now.
    #[must_use]
    pub fn finished(start: Instant, succeeded: bool) -> Self {
        Self {
            succeeded,
            elapsed: start.elapsed(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aggregate {
    pub total_requests: usize,
    pub completed: usize,
    pub incomplete: usize,
    pub mean_latency: Duration,
}
