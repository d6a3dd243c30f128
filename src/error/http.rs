use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Warm-up request to '{url}' failed: {source}")]
    WarmupFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
