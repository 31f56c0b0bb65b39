// Sync engine: pushes queued clock entries to the remote side.
//
// Each entry is committed and marked on its own, so one failure never
// stops the rest of the pass. Failed entries stay unsynced and are tried
// again on the next pass. The last sync time is written once the whole
// pass is over, whatever the individual outcomes.

use crate::modules::clock_entries::adapters::outbound::local_entry_store::LocalEntryStore;
use crate::modules::clock_entries::core::ports::RemoteCommitter;
use crate::modules::clock_entries::use_cases::sync_offline_entries::outcome::{
    SyncOutcome, SyncReport, SyncStatus,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::connectivity::ConnectivityMonitor;
use crate::shared::infrastructure::key_value_store::SlotError;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] SlotError),
}

pub struct SyncEngine<TRemote>
where
    TRemote: RemoteCommitter + 'static,
{
    store: Arc<LocalEntryStore>,
    remote: Arc<TRemote>,
    connectivity: Arc<ConnectivityMonitor>,
    clock: Arc<dyn Clock>,
    pass: Mutex<()>,
}

impl<TRemote> SyncEngine<TRemote>
where
    TRemote: RemoteCommitter + 'static,
{
    pub fn new(
        store: Arc<LocalEntryStore>,
        remote: Arc<TRemote>,
        connectivity: Arc<ConnectivityMonitor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            remote,
            connectivity,
            clock,
            pass: Mutex::new(()),
        }
    }

    pub async fn sync_all(&self) -> Result<SyncOutcome, SyncError> {
        if !self.connectivity.is_online() {
            debug!("offline, sync skipped");
            return Ok(SyncOutcome::Offline);
        }

        let _pass = self.pass.lock().await;
        if !self.connectivity.is_online() {
            debug!("went offline while waiting for the previous pass, sync skipped");
            return Ok(SyncOutcome::Offline);
        }
        let pending = self.store.unsynced_entries().await?;
        let attempted = pending.len();
        let mut synced = Vec::with_capacity(attempted);
        let mut failed = Vec::new();

        for entry in pending {
            if let Err(error) = self.remote.commit(&entry).await {
                warn!(entry_id = %entry.id, %error, "failed to sync entry");
                failed.push(entry.id);
                continue;
            }
            match self.store.mark_synced(&entry.id).await {
                Ok(_) => {
                    debug!(entry_id = %entry.id, "synced entry");
                    synced.push(entry.id);
                }
                Err(error) => {
                    warn!(entry_id = %entry.id, %error, "failed to mark entry synced");
                    failed.push(entry.id);
                }
            }
        }

        let finished_at = self.clock.now();
        self.store.record_last_sync(finished_at).await?;
        info!(
            attempted,
            synced = synced.len(),
            failed = failed.len(),
            "sync pass finished"
        );
        Ok(SyncOutcome::Completed(SyncReport {
            attempted,
            synced,
            failed,
            finished_at,
        }))
    }

    pub async fn status(&self) -> Result<SyncStatus, SyncError> {
        Ok(SyncStatus {
            online: self.connectivity.is_online(),
            pending_entries: self.store.unsynced_entries().await?.len(),
            last_sync_time: self.store.last_sync_time().await?,
        })
    }
}
