use crate::modules::clock_entries::core::entry::ClockEntry;
use crate::modules::clock_entries::core::ports::{CommitError, RemoteCommitter};
use std::time::Duration;
use tracing::debug;

/// Stand-in for the backend: waits `delay`, then accepts every entry.
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    delay: Duration,
}

impl SimulatedRemote {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl RemoteCommitter for SimulatedRemote {
    async fn commit(&self, entry: &ClockEntry) -> Result<(), CommitError> {
        tokio::time::sleep(self.delay).await;
        debug!(entry_id = %entry.id, "remote accepted entry");
        Ok(())
    }
}
