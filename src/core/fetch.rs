use crate::core::url::expand;
use crate::domain::model::{PingBody, ProbeResult};
use crate::domain::ports::CommitLookup;
use crate::utils::error::{Result, StatusError};
use regex::Regex;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Probes one service's `/ping` endpoint and classifies the outcome. All
/// per-service failures end up as `ProbeResult::Error`; the only `Err` this
/// returns is a failed commit lookup, which is fatal for the whole run.
#[derive(Clone)]
pub struct StatusFetcher {
    client: Client,
    lookup: Arc<dyn CommitLookup>,
}

impl StatusFetcher {
    pub fn new(lookup: Arc<dyn CommitLookup>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, lookup })
    }

    pub async fn fetch(&self, service: &str, template: &str, environment: &str) -> Result<ProbeResult> {
        match self.probe(service, template, environment).await {
            Ok(result) => Ok(result),
            Err(err @ StatusError::CommitLookupFailed { .. }) => Err(err),
            Err(err) => Ok(ProbeResult::Error {
                service: service.to_string(),
                message: err.to_string(),
            }),
        }
    }

    async fn probe(&self, service: &str, template: &str, environment: &str) -> Result<ProbeResult> {
        let url = expand(template, environment);
        tracing::debug!(service, %url, "probing");

        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            return Ok(ProbeResult::Error {
                service: service.to_string(),
                message: format!(
                    "Service responded with status: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                ),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap_or("text/plain")
            .trim()
            .to_string();

        let (version, uptime) = if content_type == "application/json" {
            let body: PingBody = response.json().await?;
            (body.version, body.uptime)
        } else {
            let body = response.text().await?;
            (scan_version(&body), None)
        };

        let commit = match &version {
            Some(hash) => self.lookup.lookup(service, hash).await?,
            None => None,
        };

        Ok(ProbeResult::Success {
            service: service.to_string(),
            git_hash: version,
            uptime,
            commit,
        })
    }
}

/// First hex token of 5-40 chars on word boundaries, if any.
pub fn scan_version(body: &str) -> Option<String> {
    static HASH_RE: OnceLock<Regex> = OnceLock::new();
    let re = HASH_RE.get_or_init(|| Regex::new(r"\b([a-f0-9]{5,40})\b").unwrap());
    re.find(body).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_version_finds_first_hex_token() {
        assert_eq!(
            scan_version("status ok rev a1b2c3d4e5"),
            Some("a1b2c3d4e5".to_string())
        );
    }

    #[test]
    fn test_scan_version_ignores_short_and_non_hex() {
        assert_eq!(scan_version("ok abcd xyz12345"), None);
        assert_eq!(scan_version("pong"), None);
    }

    #[test]
    fn test_scan_version_respects_word_boundaries() {
        // embedded in a longer word, no match; standalone later, match
        assert_eq!(
            scan_version("zzfeedbeefzz then feedbeef"),
            Some("feedbeef".to_string())
        );
    }
}
