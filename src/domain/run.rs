use std::fmt;
use std::time::Duration;

use url::Url;

use crate::args::{PositiveUsize, Protocol};
use crate::error::ValidationError;

/// Whether probes verify the server certificate chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsPolicy {
    /// Accept self-signed and otherwise invalid certificates.
    #[default]
    SkipVerification,
    Verify,
}

impl TlsPolicy {
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            TlsPolicy::Verify
        } else {
            TlsPolicy::SkipVerification
        }
    }

    #[must_use]
    pub const fn accepts_invalid_certs(self) -> bool {
        matches!(self, TlsPolicy::SkipVerification)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TcpAddress {
    host: String,
    port: u16,
}

impl TcpAddress {
    /// Parses `host:port`. Bracketed IPv6 hosts (`[::1]:80`) are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns an error when the port is missing or not a valid `u16`, or the
    /// host is empty.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let (host, port) =
            trimmed
                .rsplit_once(':')
                .ok_or_else(|| ValidationError::InvalidTcpAddress {
                    value: value.to_owned(),
                })?;
        if host.is_empty() {
            return Err(ValidationError::InvalidTcpAddress {
                value: value.to_owned(),
            });
        }
        let port: u16 = port
            .parse()
            .map_err(|err| ValidationError::InvalidTcpPort {
                value: value.to_owned(),
                source: err,
            })?;
        Ok(Self {
            host: host.to_owned(),
            port,
        })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for TcpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Http(Url),
    Tcp(TcpAddress),
}

impl Target {
    /// Parses a target string for the given protocol.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is empty, an HTTP target is not an
    /// absolute `http`/`https` URL with a host, or a TCP target is not
    /// `host:port`.
    pub fn parse(protocol: Protocol, value: &str) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingTarget);
        }
        match protocol {
            Protocol::Http => parse_http_target(value).map(Target::Http),
            Protocol::Tcp => TcpAddress::parse(value).map(Target::Tcp),
        }
    }

    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        match self {
            Target::Http(_) => Protocol::Http,
            Target::Tcp(_) => Protocol::Tcp,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Http(url) => write!(f, "{}", url),
            Target::Tcp(addr) => write!(f, "{}", addr),
        }
    }
}

fn parse_http_target(value: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(value.trim()).map_err(|err| ValidationError::InvalidUrl {
        url: value.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            });
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::UrlMissingHost);
    }
    Ok(url)
}

/// Everything a run needs, fixed before the first probe is dispatched.
#[derive(Debug, Clone)]
pub struct RunConfig {
    target: Target,
    target_input: String,
    concurrency: PositiveUsize,
    requests: PositiveUsize,
    probe_timeout: Option<Duration>,
    tls: TlsPolicy,
}

impl RunConfig {
    /// Validates the raw target and counts.
    ///
    /// # Errors
    ///
    /// Returns an error when `concurrency` or `requests` is zero or the target
    /// does not match the protocol.
    pub fn new(
        protocol: Protocol,
        target: &str,
        concurrency: usize,
        requests: usize,
    ) -> Result<Self, ValidationError> {
        let concurrency = PositiveUsize::try_from(concurrency).map_err(|_err| {
            ValidationError::NonPositiveCount {
                field: "concurrency",
            }
        })?;
        let requests = PositiveUsize::try_from(requests)
            .map_err(|_err| ValidationError::NonPositiveCount { field: "requests" })?;
        Self::parse(protocol, target, concurrency, requests)
    }

    /// Parses the target, keeping the text as given for display.
    ///
    /// # Errors
    ///
    /// Returns an error when the target does not match the protocol.
    pub fn parse(
        protocol: Protocol,
        target: &str,
        concurrency: PositiveUsize,
        requests: PositiveUsize,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            target: Target::parse(protocol, target)?,
            target_input: target.trim().to_owned(),
            concurrency,
            requests,
            probe_timeout: None,
            tls: TlsPolicy::SkipVerification,
        })
    }

    #[must_use]
    pub const fn with_probe_timeout(mut self, probe_timeout: Option<Duration>) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    #[must_use]
    pub const fn with_tls_policy(mut self, tls: TlsPolicy) -> Self {
        self.tls = tls;
        self
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// The target as the user wrote it.
    #[must_use]
    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.target.protocol()
    }

    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency.get()
    }

    #[must_use]
    pub const fn requests(&self) -> usize {
        self.requests.get()
    }

    #[must_use]
    pub const fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout
    }

    #[must_use]
    pub const fn tls_policy(&self) -> TlsPolicy {
        self.tls
    }
}
