use crate::config::{Config, StorageBackend};
use crate::modules::clock_entries::core::entry::{ClockType, NewClockEntry};
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::connectivity::ConnectivityTransitions;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Monday 2024-01-15, noon UTC. The demo roster has entries on this day
/// and the day before.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

pub fn new_entry(clock_type: ClockType) -> NewClockEntry {
    NewClockEntry::new(
        "emp_123456",
        "Employee 1256",
        clock_type,
        "demo-property",
        fixed_now(),
    )
}

pub fn test_config() -> Config {
    Config {
        storage: StorageBackend::Memory,
        sync_delay: Duration::ZERO,
        admin_login_delay: Duration::ZERO,
        employee_login_delay: Duration::ZERO,
        ..Config::default()
    }
}

pub struct TestApp {
    pub state: AppState,
    pub transitions: ConnectivityTransitions,
    pub slots: Arc<InMemoryKeyValueStore>,
    pub clock: Arc<FixedClock>,
}

pub async fn test_app(config: &Config) -> TestApp {
    let slots = Arc::new(InMemoryKeyValueStore::new());
    let clock = Arc::new(FixedClock::new(fixed_now()));
    let (state, transitions) = AppState::assemble(config, slots.clone(), clock.clone())
        .await
        .unwrap();
    TestApp {
        state,
        transitions,
        slots,
        clock,
    }
}
