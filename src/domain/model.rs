use serde::Deserialize;

/// Outcome of probing one service. Exactly one variant per service per cycle;
/// `service` always matches a registry key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Success {
        service: String,
        git_hash: Option<String>,
        uptime: Option<u64>,
        commit: Option<CommitInfo>,
    },
    Error {
        service: String,
        message: String,
    },
}

impl ProbeResult {
    pub fn service(&self) -> &str {
        match self {
            ProbeResult::Success { service, .. } => service,
            ProbeResult::Error { service, .. } => service,
        }
    }

    /// The value watch mode diffs on: the observed hash for a success,
    /// nothing for an error.
    pub fn change_key(&self) -> Option<&str> {
        match self {
            ProbeResult::Success { git_hash, .. } => git_hash.as_deref(),
            ProbeResult::Error { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitInfo {
    pub message: String,
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
}

/// Body of a JSON `/ping` response. Both fields are optional.
#[derive(Debug, Deserialize)]
pub struct PingBody {
    pub version: Option<String>,
    pub uptime: Option<u64>,
}
