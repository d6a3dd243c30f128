//! Bounded fan-out of probes and collection of their results.
mod pool;
mod warmup;


use std::sync::Arc;

use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::domain::{RunConfig, Target};
use crate::error::AppResult;
use crate::metrics::ProbeResult;
use crate::probe::{HttpProbe, Probe, TcpProbe, build_client};

pub use warmup::{HeaderDump, canonical_header_name, fetch_headers};

struct WarmupRequest {
    client: Client,
    url: Url,
}

/// Runs exactly `requests` probes with at most `concurrency` in flight.
pub struct Dispatcher {
    config: RunConfig,
    probe: Arc<dyn Probe>,
    warmup: Option<WarmupRequest>,
}

impl Dispatcher {
    /// Builds the probe for the configured protocol. HTTP runs share one
    /// client between the warm-up request and every probe.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn for_config(config: RunConfig) -> AppResult<Self> {
        let (probe, warmup): (Arc<dyn Probe>, Option<WarmupRequest>) = match config.target() {
            Target::Http(url) => {
                let client = build_client(config.tls_policy())?;
                let probe: Arc<dyn Probe> = Arc::new(HttpProbe::new(client.clone(), url.clone()));
                let warmup = WarmupRequest {
                    client,
                    url: url.clone(),
                };
                (probe, Some(warmup))
            }
            Target::Tcp(addr) => {
                let probe: Arc<dyn Probe> = Arc::new(TcpProbe::new(addr));
                (probe, None)
            }
        };
        Ok(Self {
            config,
            probe,
            warmup,
        })
    }

    /// Uses a caller-supplied probe; no warm-up request is made.
    #[must_use]
    pub const fn with_probe(config: RunConfig, probe: Arc<dyn Probe>) -> Self {
        Self {
            config,
            probe,
            warmup: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Fetches response headers once for display. Failures are logged and
    /// swallowed so the run can proceed.
    pub async fn warm_up(&self) -> Option<HeaderDump> {
        let warmup = self.warmup.as_ref()?;
        match fetch_headers(&warmup.client, &warmup.url).await {
            Ok(dump) => Some(dump),
            Err(err) => {
                warn!("Skipping header dump: {}", err);
                None
            }
        }
    }

    /// Blocks until every probe has reported.
    ///
    /// # Errors
    ///
    /// Returns an error when a worker task dies before reporting all of its
    /// results.
    pub async fn run(&self) -> AppResult<Vec<ProbeResult>> {
        let requests = self.config.requests();
        let concurrency = self.config.concurrency();
        info!(
            "Dispatching {} {} probes to {} with concurrency {}",
            requests,
            self.config.protocol().as_str(),
            self.config.target(),
            concurrency
        );

        let results = pool::run_pool(
            &self.probe,
            requests,
            concurrency,
            self.config.probe_timeout(),
        )
        .await?;

        let completed = results.iter().filter(|result| result.succeeded).count();
        info!(
            "Collected {} probe results ({} completed)",
            results.len(),
            completed
        );
        Ok(results)
    }
}
