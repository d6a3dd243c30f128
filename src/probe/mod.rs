//! Single-shot network probes.
mod client;
mod http;
mod tcp;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

use crate::metrics::ProbeResult;

pub use client::build_client;
pub use http::{HttpProbe, drain_response_body};
pub use tcp::TcpProbe;

/// One unit of load. Implementations open exactly one connection per call,
/// never retry, and report failures as data rather than errors.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self) -> ProbeResult;
}
