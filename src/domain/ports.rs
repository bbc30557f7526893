use crate::domain::model::CommitInfo;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Pluggable commit-lookup capability. `Ok(None)` means the capability is
/// unavailable (soft skip); `Err` means it was available but failed, which
/// callers treat as fatal.
#[async_trait]
pub trait CommitLookup: Send + Sync {
    async fn lookup(&self, service: &str, git_hash: &str) -> Result<Option<CommitInfo>>;
}
