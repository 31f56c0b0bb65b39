use crate::shared::infrastructure::key_value_store::{KeyValueError, KeyValueStore};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    slots: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn raw(&self, slot: &str) -> Option<String> {
        self.slots.read().await.get(slot).cloned()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, slot: &str) -> Result<Option<String>, KeyValueError> {
        if self.is_offline {
            return Err(KeyValueError::Backend("Key-value store offline".into()));
        }
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn set(&self, slot: &str, value: String) -> Result<(), KeyValueError> {
        if self.is_offline {
            return Err(KeyValueError::Backend("Key-value store offline".into()));
        }
        self.slots.write().await.insert(slot.to_string(), value);
        Ok(())
    }
}
