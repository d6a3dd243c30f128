//! Core library for the `loadprobe` CLI.
//!
//! `loadprobe` fires a fixed number of HTTP GET or TCP connect probes at one
//! target with bounded concurrency, then reports how many completed and the
//! mean time per probe. The binary is a thin wrapper around [`entry::run`].
mod app;
pub mod args;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod entry;
pub mod error;
pub mod metrics;
pub mod probe;
mod system;

#[cfg(test)]
mod test_support;
