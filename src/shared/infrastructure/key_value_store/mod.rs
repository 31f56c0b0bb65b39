// Named slots holding JSON text, the kiosk's only persistence.
//
// Callers read a whole slot, change it and write it back. There is no
// partial update and no version token on a slot.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueError {
    #[error("slot {slot} unavailable: {source}")]
    Io {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum SlotError {
    #[error(transparent)]
    Storage(#[from] KeyValueError),

    #[error("slot {slot} holds malformed data: {source}")]
    Malformed {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, slot: &str) -> Result<Option<String>, KeyValueError>;
    async fn set(&self, slot: &str, value: String) -> Result<(), KeyValueError>;
}

pub async fn read_slot<T>(store: &dyn KeyValueStore, slot: &str) -> Result<Option<T>, SlotError>
where
    T: DeserializeOwned,
{
    let Some(raw) = store.get(slot).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| SlotError::Malformed {
            slot: slot.to_string(),
            source,
        })
}

pub async fn write_slot<T>(store: &dyn KeyValueStore, slot: &str, value: &T) -> Result<(), SlotError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| SlotError::Malformed {
        slot: slot.to_string(),
        source,
    })?;
    store.set(slot, raw).await?;
    Ok(())
}

pub mod file_system;
pub mod in_memory;

#[cfg(test)]
mod slot_tests {
    use super::in_memory::InMemoryKeyValueStore;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_read_back_what_was_written() {
        let store = InMemoryKeyValueStore::new();
        write_slot(&store, "numbers", &vec![1, 2, 3]).await.unwrap();
        let numbers: Option<Vec<i32>> = read_slot(&store, "numbers").await.unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_read_none_from_an_empty_slot() {
        let store = InMemoryKeyValueStore::new();
        let value: Option<Vec<i32>> = read_slot(&store, "missing").await.unwrap();
        assert_eq!(value, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_malformed_slot_contents() {
        let store = InMemoryKeyValueStore::new();
        store.set("numbers", "not-json".into()).await.unwrap();
        let result: Result<Option<Vec<i32>>, SlotError> = read_slot(&store, "numbers").await;
        assert!(matches!(result, Err(SlotError::Malformed { slot, .. }) if slot == "numbers"));
    }
}
