use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::domain::TlsPolicy;
use crate::error::{AppError, AppResult, HttpError};

/// Builds the HTTP client shared by the warm-up request and every probe.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub fn build_client(tls: TlsPolicy) -> AppResult<Client> {
    let mut client_builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

    if tls.accepts_invalid_certs() {
        client_builder = client_builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    match client_builder.build() {
        Ok(client) => Ok(client),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            Err(AppError::http(HttpError::BuildClientFailed { source: e }))
        }
    }
}
