use super::types::PositiveUsize;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadprobe/", env!("CARGO_PKG_VERSION"));

/// Probes allowed in flight when `-c` is not given.
pub const DEFAULT_CONCURRENCY: PositiveUsize = PositiveUsize::saturating(50);
/// Probes per run when `-n` is not given.
pub const DEFAULT_REQUESTS: PositiveUsize = PositiveUsize::saturating(50);
