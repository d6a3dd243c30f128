//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::BenchArgs;
pub use defaults::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS};
pub use types::{PositiveUsize, Protocol};

pub(crate) use defaults::DEFAULT_USER_AGENT;
