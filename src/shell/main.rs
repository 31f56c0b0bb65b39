use std::sync::Arc;

use anyhow::Context;
use time_clock::config::{Config, StorageBackend};
use time_clock::shared::core::clock::{Clock, SystemClock};
use time_clock::shared::infrastructure::key_value_store::KeyValueStore;
use time_clock::shared::infrastructure::key_value_store::file_system::FileSystemKeyValueStore;
use time_clock::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use time_clock::shell::http::router;
use time_clock::shell::state::AppState;
use time_clock::shell::workers::spawn_connectivity_observer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageBackend::File => Arc::new(
            FileSystemKeyValueStore::open(config.data_dir.clone())
                .await
                .with_context(|| format!("opening data dir {}", config.data_dir.display()))?,
        ),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let (state, transitions) = AppState::assemble(&config, store, clock).await?;
    spawn_connectivity_observer(transitions, state.sync_engine.clone());

    if state.connectivity.is_online() {
        if let Err(error) = state.sync_engine.sync_all().await {
            error!(%error, "initial sync failed");
        }
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, storage = ?config.storage, "time clock listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
