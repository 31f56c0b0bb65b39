// Clock entries queued on the device, plus the last successful sync time.
//
// Every operation rewrites the whole entry slot. Writers inside this
// process are serialised by `write_lock`; nothing guards against a second
// process writing the same slot.

use crate::modules::clock_entries::core::entry::{ClockEntry, NewClockEntry};
use crate::shared::infrastructure::key_value_store::{
    KeyValueStore, SlotError, read_slot, write_slot,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

pub const CLOCK_ENTRIES_SLOT: &str = "timetracker-clock-entries";
pub const LAST_SYNC_SLOT: &str = "timetracker-last-sync";

pub struct LocalEntryStore {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl LocalEntryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<ClockEntry>, SlotError> {
        Ok(read_slot(&*self.store, CLOCK_ENTRIES_SLOT)
            .await?
            .unwrap_or_default())
    }

    pub async fn append(&self, entry: NewClockEntry) -> Result<ClockEntry, SlotError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        let stored = entry.unsynced();
        entries.push(stored.clone());
        write_slot(&*self.store, CLOCK_ENTRIES_SLOT, &entries).await?;
        debug!(
            entry_id = %stored.id,
            employee_id = %stored.employee_id,
            clock_type = %stored.clock_type,
            "clock entry queued"
        );
        Ok(stored)
    }

    pub async fn all_entries(&self) -> Result<Vec<ClockEntry>, SlotError> {
        self.load().await
    }

    /// Unsynced entries in store order.
    pub async fn unsynced_entries(&self) -> Result<Vec<ClockEntry>, SlotError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|entry| !entry.synced)
            .collect())
    }

    /// Returns whether the entry moved to synced. Unknown and already
    /// synced ids leave the slot untouched.
    pub async fn mark_synced(&self, entry_id: &str) -> Result<bool, SlotError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.id == entry_id && !entry.synced)
        else {
            return Ok(false);
        };
        entry.synced = true;
        write_slot(&*self.store, CLOCK_ENTRIES_SLOT, &entries).await?;
        Ok(true)
    }

    pub async fn record_last_sync(&self, at: DateTime<Utc>) -> Result<(), SlotError> {
        write_slot(&*self.store, LAST_SYNC_SLOT, &at).await
    }

    pub async fn last_sync_time(&self) -> Result<Option<DateTime<Utc>>, SlotError> {
        read_slot(&*self.store, LAST_SYNC_SLOT).await
    }
}

#[cfg(test)]
mod local_entry_store_tests {
    use super::*;
    use crate::modules::clock_entries::core::entry::ClockType;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use crate::test_support::fixtures::{fixed_now, new_entry};
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Arc<InMemoryKeyValueStore>, LocalEntryStore) {
        let slots = Arc::new(InMemoryKeyValueStore::new());
        let store = LocalEntryStore::new(slots.clone());
        (slots, store)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_append_entries_unsynced_in_order(
        before_each: (Arc<InMemoryKeyValueStore>, LocalEntryStore),
    ) {
        let (_, store) = before_each;
        let first = store.append(new_entry(ClockType::ClockIn)).await.unwrap();
        let second = store.append(new_entry(ClockType::ClockOut)).await.unwrap();

        assert!(!first.synced);
        let entries = store.all_entries().await.unwrap();
        assert_eq!(entries, vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_persist_a_json_array_in_the_entries_slot(
        before_each: (Arc<InMemoryKeyValueStore>, LocalEntryStore),
    ) {
        let (slots, store) = before_each;
        let entry = store.append(new_entry(ClockType::ClockIn)).await.unwrap();

        let raw = slots.raw(CLOCK_ENTRIES_SLOT).await.expect("slot written");
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["id"], entry.id.as_str());
        assert_eq!(json[0]["synced"], false);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_only_unsynced_entries(
        before_each: (Arc<InMemoryKeyValueStore>, LocalEntryStore),
    ) {
        let (_, store) = before_each;
        let first = store.append(new_entry(ClockType::ClockIn)).await.unwrap();
        let second = store.append(new_entry(ClockType::ClockOut)).await.unwrap();
        store.mark_synced(&first.id).await.unwrap();

        let pending = store.unsynced_entries().await.unwrap();
        assert_eq!(pending, vec![second]);
    }

    #[rstest]
    #[tokio::test]
    async fn mark_synced_should_be_idempotent(
        before_each: (Arc<InMemoryKeyValueStore>, LocalEntryStore),
    ) {
        let (_, store) = before_each;
        let entry = store.append(new_entry(ClockType::ClockIn)).await.unwrap();

        assert!(store.mark_synced(&entry.id).await.unwrap());
        let once = store.all_entries().await.unwrap();
        assert!(!store.mark_synced(&entry.id).await.unwrap());
        let twice = store.all_entries().await.unwrap();

        assert_eq!(once, twice);
        assert!(twice[0].synced);
    }

    #[rstest]
    #[tokio::test]
    async fn mark_synced_should_ignore_unknown_ids(
        before_each: (Arc<InMemoryKeyValueStore>, LocalEntryStore),
    ) {
        let (_, store) = before_each;
        assert!(!store.mark_synced("no-such-entry").await.unwrap());
        store.append(new_entry(ClockType::ClockIn)).await.unwrap();
        assert!(!store.mark_synced("no-such-entry").await.unwrap());
        assert_eq!(store.unsynced_entries().await.unwrap().len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_the_last_sync_time(
        before_each: (Arc<InMemoryKeyValueStore>, LocalEntryStore),
    ) {
        let (slots, store) = before_each;
        assert_eq!(store.last_sync_time().await.unwrap(), None);

        store.record_last_sync(fixed_now()).await.unwrap();
        assert_eq!(store.last_sync_time().await.unwrap(), Some(fixed_now()));
        assert_eq!(
            slots.raw(LAST_SYNC_SLOT).await,
            Some("\"2024-01-15T12:00:00Z\"".to_string())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn concurrent_appends_should_not_lose_entries(
        before_each: (Arc<InMemoryKeyValueStore>, LocalEntryStore),
    ) {
        let (_, store) = before_each;
        let store = Arc::new(store);
        let writers = (0..10).map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let clock_type = if i % 2 == 0 {
                    ClockType::ClockIn
                } else {
                    ClockType::ClockOut
                };
                store.append(new_entry(clock_type)).await.unwrap();
            })
        });
        for writer in writers.collect::<Vec<_>>() {
            writer.await.unwrap();
        }
        assert_eq!(store.all_entries().await.unwrap().len(), 10);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_slots_are_offline() {
        let mut slots = InMemoryKeyValueStore::new();
        slots.toggle_offline();
        let store = LocalEntryStore::new(Arc::new(slots));
        let result = store.append(new_entry(ClockType::ClockIn)).await;
        assert!(matches!(result, Err(SlotError::Storage(_))));
    }
}
