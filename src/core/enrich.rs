use crate::domain::model::CommitInfo;
use crate::domain::ports::CommitLookup;
use crate::utils::error::{Result, StatusError};
use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct GhCommitResponse {
    commit: CommitInfo,
}

/// Commit lookup backed by the GitHub CLI. A missing `gh` binary is a soft
/// skip; a present-but-failing `gh` is a configuration problem and fatal.
pub struct GhCommitLookup;

#[async_trait]
impl CommitLookup for GhCommitLookup {
    async fn lookup(&self, service: &str, git_hash: &str) -> Result<Option<CommitInfo>> {
        let mut gh = Command::new("gh");
        gh.arg("api")
            .arg("-HAccept: application/vnd.github.v3.raw+json")
            .arg(format!("/repos/lookback/{service}/commits/{git_hash}"));

        let output = match timeout(LOOKUP_TIMEOUT, gh.output()).await {
            Ok(Ok(output)) => output,
            // gh isn't installed, this is a no-op
            Ok(Err(err)) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Ok(Err(err)) => {
                return Err(StatusError::CommitLookupFailed {
                    service: service.to_string(),
                    detail: err.to_string(),
                })
            }
            Err(_) => {
                return Err(StatusError::CommitLookupFailed {
                    service: service.to_string(),
                    detail: format!("gh did not finish within {}s", LOOKUP_TIMEOUT.as_secs()),
                })
            }
        };

        if !output.status.success() {
            return Err(StatusError::CommitLookupFailed {
                service: service.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let parsed: GhCommitResponse =
            serde_json::from_slice(&output.stdout).map_err(|err| StatusError::CommitLookupFailed {
                service: service.to_string(),
                detail: format!("unexpected gh output: {err}"),
            })?;

        Ok(Some(parsed.commit))
    }
}

/// No-op lookup for when enrichment is not wanted.
pub struct NoCommitLookup;

#[async_trait]
impl CommitLookup for NoCommitLookup {
    async fn lookup(&self, _service: &str, _git_hash: &str) -> Result<Option<CommitInfo>> {
        Ok(None)
    }
}
