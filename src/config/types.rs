use std::time::Duration;

use serde::Deserialize;

use crate::args::Protocol;
use crate::args::parsers::parse_duration_value;
use crate::error::ValidationError;

/// Every field is optional; unset fields leave the CLI value untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub target: Option<String>,
    pub protocol: Option<Protocol>,
    pub concurrency: Option<usize>,
    #[serde(alias = "number")]
    pub requests: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub strict_tls: Option<bool>,
    pub verbose: Option<bool>,
    pub no_color: Option<bool>,
}

/// `timeout = 5` means seconds; `timeout = "250ms"` takes a unit suffix.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
