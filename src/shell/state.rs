use crate::config::Config;
use crate::modules::branding::core::selector::ThemeSelector;
use crate::modules::branding::core::theme::ThemeCatalog;
use crate::modules::clock_entries::adapters::outbound::local_entry_store::LocalEntryStore;
use crate::modules::clock_entries::adapters::outbound::simulated_remote::SimulatedRemote;
use crate::modules::clock_entries::use_cases::sync_offline_entries::handler::SyncEngine;
use crate::modules::roster::adapters::outbound::employee_cache::{CachedEmployee, EmployeeCache};
use crate::modules::roster::core::seed::demo_roster;
use crate::modules::roster::use_cases::browse_employees::view_model::EmployeeViewModel;
use crate::modules::session::core::access_code::{AccessCodeDirectory, DEMO_PROPERTY_ID};
use crate::modules::session::use_cases::controller::SessionController;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::connectivity::{ConnectivityMonitor, ConnectivityTransitions};
use crate::shared::infrastructure::key_value_store::{KeyValueStore, SlotError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("demo roster is malformed: {0}")]
    Roster(#[from] serde_json::Error),

    #[error(transparent)]
    Slot(#[from] SlotError),
}

#[derive(Clone)]
pub struct AppState {
    pub session: SessionController,
    pub sync_engine: Arc<SyncEngine<SimulatedRemote>>,
    pub connectivity: Arc<ConnectivityMonitor>,
    pub entries: Arc<LocalEntryStore>,
    pub themes: Arc<ThemeSelector>,
    pub employees: Arc<Mutex<EmployeeViewModel>>,
    pub employee_cache: Arc<EmployeeCache>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wires every component over `store` and seeds the employee cache.
    /// The transitions receiver is for the connectivity observer.
    pub async fn assemble(
        config: &Config,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<(Self, ConnectivityTransitions), StartupError> {
        let (connectivity, transitions) = ConnectivityMonitor::new(config.start_online);
        let connectivity = Arc::new(connectivity);
        let entries = Arc::new(LocalEntryStore::new(store.clone()));
        let themes = Arc::new(ThemeSelector::new(
            ThemeCatalog::standard(),
            &config.default_theme,
        ));

        let sync_engine = Arc::new(SyncEngine::new(
            entries.clone(),
            Arc::new(SimulatedRemote::new(config.sync_delay)),
            connectivity.clone(),
            clock.clone(),
        ));

        let session = SessionController::new(
            entries.clone(),
            AccessCodeDirectory::demo(),
            themes.clone(),
            clock.clone(),
            config.session_timings(),
        );

        let roster = demo_roster()?;
        let employee_cache = Arc::new(EmployeeCache::new(store));
        let summaries: Vec<CachedEmployee> = roster
            .iter()
            .map(|employee| CachedEmployee::from_roster(employee, DEMO_PROPERTY_ID))
            .collect();
        employee_cache.store_employees(&summaries).await?;
        let employees = Arc::new(Mutex::new(EmployeeViewModel::new(roster, clock.today())));

        Ok((
            Self {
                session,
                sync_engine,
                connectivity,
                entries,
                themes,
                employees,
                employee_cache,
                clock,
            },
            transitions,
        ))
    }
}
