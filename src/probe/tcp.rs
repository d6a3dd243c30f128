use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::TcpAddress;
use crate::metrics::ProbeResult;

use super::Probe;

/// Connects and immediately closes. Name resolution happens on every dial.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    address: String,
}

impl TcpProbe {
    #[must_use]
    pub fn new(address: &TcpAddress) -> Self {
        Self {
            address: address.to_string(),
        }
    }
}

#[async_trait]
impl Probe for TcpProbe {
    async fn probe(&self) -> ProbeResult {
        let start = Instant::now();
        match TcpStream::connect(self.address.as_str()).await {
            Ok(stream) => {
                drop(stream);
                ProbeResult::finished(start, true)
            }
            Err(err) => {
                debug!("TCP probe to {} failed: {}", self.address, err);
                ProbeResult::finished(start, false)
            }
        }
    }
}
