use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::time::Instant;
use tracing::debug;

use crate::metrics::ProbeResult;

use super::Probe;

#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    url: Url,
}

impl HttpProbe {
    #[must_use]
    pub const fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self) -> ProbeResult {
        let start = Instant::now();
        let outcome = match self.client.get(self.url.clone()).send().await {
            Ok(response) => drain_response_body(response).await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(_) => ProbeResult::finished(start, true),
            Err(err) => {
                debug!("HTTP probe to {} failed: {}", self.url, err);
                ProbeResult::finished(start, false)
            }
        }
    }
}

/// Reads the body to the end so the connection can return to the pool.
///
/// # Errors
///
/// Returns the transport error that interrupted the body stream.
pub async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
