// What the sync engine needs from the authoritative side.

use crate::modules::clock_entries::core::entry::ClockEntry;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("remote rejected entry {entry_id}: {reason}")]
    Rejected { entry_id: String, reason: String },

    #[error("transient backend error: {0}")]
    Transient(String),
}

#[async_trait]
pub trait RemoteCommitter: Send + Sync {
    async fn commit(&self, entry: &ClockEntry) -> Result<(), CommitError>;
}
