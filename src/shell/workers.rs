// Connectivity observer: runs one sync pass per offline-to-online
// transition, in the order the transitions happened.

use crate::modules::clock_entries::core::ports::RemoteCommitter;
use crate::modules::clock_entries::use_cases::sync_offline_entries::handler::SyncEngine;
use crate::shared::infrastructure::connectivity::ConnectivityTransitions;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

pub fn spawn_connectivity_observer<TRemote>(
    mut transitions: ConnectivityTransitions,
    engine: Arc<SyncEngine<TRemote>>,
) -> JoinHandle<()>
where
    TRemote: RemoteCommitter + 'static,
{
    tokio::spawn(async move {
        while let Some(online) = transitions.next().await {
            if !online {
                debug!("went offline, entries will queue locally");
                continue;
            }
            if let Err(error) = engine.sync_all().await {
                error!(%error, "sync after reconnect failed");
            }
        }
        debug!("connectivity observer stopped");
    })
}
