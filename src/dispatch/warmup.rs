use reqwest::{Client, Url};

use crate::error::HttpError;
use crate::probe::drain_response_body;

/// Response headers grouped by canonical name, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDump {
    pub entries: Vec<(String, Vec<String>)>,
}

impl HeaderDump {
    pub fn push(&mut self, name: &str, value: String) {
        let name = canonical_header_name(name);
        if !self.entries.iter().any(|(key, _)| *key == name) {
            self.entries.push((name.clone(), Vec::new()));
        }
        if let Some((_, values)) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            values.push(value);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let name = canonical_header_name(name);
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, values)| values.as_slice())
    }
}

/// Sends one GET and records the response headers.
///
/// # Errors
///
/// Returns an error when the request or the body read fails.
pub async fn fetch_headers(client: &Client, url: &Url) -> Result<HeaderDump, HttpError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|err| HttpError::WarmupFailed {
            url: url.to_string(),
            source: err,
        })?;

    let mut dump = HeaderDump::default();
    for (name, value) in response.headers() {
        dump.push(
            name.as_str(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }

    drain_response_body(response)
        .await
        .map_err(|err| HttpError::WarmupFailed {
            url: url.to_string(),
            source: err,
        })?;
    Ok(dump)
}

/// `x-probe-test` becomes `X-Probe-Test`.
#[must_use]
pub fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                let mut word: String = first.to_uppercase().collect();
                word.push_str(&chars.as_str().to_ascii_lowercase());
                word
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}
