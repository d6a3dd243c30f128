use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, timeout};
use tracing::debug;

use crate::error::{AppError, AppResult, DispatchError};
use crate::metrics::ProbeResult;
use crate::probe::Probe;

/// Fixed number of work units handed out one at a time.
pub(super) struct WorkQueue {
    remaining: AtomicUsize,
}

impl WorkQueue {
    pub(super) const fn new(units: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(units),
        }
    }

    /// Claims one unit; false once the queue is drained.
    pub(super) fn take(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| {
                left.checked_sub(1)
            })
            .is_ok()
    }
}

/// Spawns `min(concurrency, requests)` workers that drain a queue of
/// `requests` units and collects exactly `requests` results.
pub(super) async fn run_pool(
    probe: &Arc<dyn Probe>,
    requests: usize,
    concurrency: usize,
    probe_timeout: Option<Duration>,
) -> AppResult<Vec<ProbeResult>> {
    let workers = concurrency.min(requests);
    let queue = Arc::new(WorkQueue::new(requests));
    let (results_tx, mut results_rx) = mpsc::channel::<ProbeResult>(workers.max(1));
    let mut worker_handles = Vec::with_capacity(workers);

    for _ in 0..workers {
        let queue = Arc::clone(&queue);
        let probe = Arc::clone(probe);
        let results_tx = results_tx.clone();

        let handle = tokio::spawn(async move {
            while queue.take() {
                let result = probe_once(probe.as_ref(), probe_timeout).await;
                if results_tx.send(result).await.is_err() {
                    break;
                }
            }
        });
        worker_handles.push(handle);
    }
    drop(results_tx);

    let mut results = Vec::with_capacity(requests);
    while results.len() < requests {
        match results_rx.recv().await {
            Some(result) => results.push(result),
            None => break,
        }
    }

    for handle in worker_handles {
        handle
            .await
            .map_err(|err| AppError::dispatch(DispatchError::WorkerFailed { source: err }))?;
    }

    if results.len() != requests {
        return Err(AppError::dispatch(DispatchError::MissingResults {
            expected: requests,
            received: results.len(),
        }));
    }
    Ok(results)
}

async fn probe_once(probe: &dyn Probe, probe_timeout: Option<Duration>) -> ProbeResult {
    let Some(limit) = probe_timeout else {
        return probe.probe().await;
    };
    let start = Instant::now();
    match timeout(limit, probe.probe()).await {
        Ok(result) => result,
        Err(_) => {
            debug!("Probe timed out after {}ms", limit.as_millis());
            ProbeResult::finished(start, false)
        }
    }
}
