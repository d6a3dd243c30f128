//! Probe results and their aggregation.
mod aggregate;
mod types;


pub use aggregate::summarize;
pub use types::{Aggregate, ProbeResult};
