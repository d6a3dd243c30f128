//! Immutable run configuration shared by the dispatcher and probes.
mod run;


pub use run::{RunConfig, Target, TcpAddress, TlsPolicy};
