use crate::modules::roster::core::employee::Employee;
use crate::shared::infrastructure::key_value_store::{
    KeyValueStore, SlotError, read_slot, write_slot,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

pub const EMPLOYEES_SLOT: &str = "timetracker-employees";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedEmployee {
    pub id: String,
    pub name: String,
    pub property_id: String,
    pub is_active: bool,
}

impl CachedEmployee {
    pub fn from_roster(employee: &Employee, property_id: &str) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.full_name(),
            property_id: property_id.to_string(),
            is_active: true,
        }
    }
}

/// Employee summaries kept on the device for offline lookups.
pub struct EmployeeCache {
    store: Arc<dyn KeyValueStore>,
}

impl EmployeeCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Replaces the cached list.
    pub async fn store_employees(&self, employees: &[CachedEmployee]) -> Result<(), SlotError> {
        write_slot(&*self.store, EMPLOYEES_SLOT, employees).await?;
        debug!(count = employees.len(), "employee cache written");
        Ok(())
    }

    pub async fn stored_employees(&self) -> Result<Vec<CachedEmployee>, SlotError> {
        Ok(read_slot(&*self.store, EMPLOYEES_SLOT)
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod employee_cache_tests {
    use super::*;
    use crate::modules::roster::core::seed::demo_roster;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (Arc<InMemoryKeyValueStore>, EmployeeCache) {
        let slots = Arc::new(InMemoryKeyValueStore::new());
        (slots.clone(), EmployeeCache::new(slots))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_be_empty_before_anything_is_stored(
        before_each: (Arc<InMemoryKeyValueStore>, EmployeeCache),
    ) {
        let (_, cache) = before_each;
        assert!(cache.stored_employees().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_roster_summaries(
        before_each: (Arc<InMemoryKeyValueStore>, EmployeeCache),
    ) {
        let (slots, cache) = before_each;
        let summaries: Vec<CachedEmployee> = demo_roster()
            .unwrap()
            .iter()
            .map(|employee| CachedEmployee::from_roster(employee, "demo-property"))
            .collect();

        cache.store_employees(&summaries).await.unwrap();

        assert_eq!(cache.stored_employees().await.unwrap(), summaries);
        let raw: serde_json::Value =
            serde_json::from_str(&slots.raw(EMPLOYEES_SLOT).await.unwrap()).unwrap();
        assert_eq!(
            raw[0],
            serde_json::json!({
                "id": "1",
                "name": "John Doe",
                "propertyId": "demo-property",
                "isActive": true
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn storing_again_should_replace_the_list(
        before_each: (Arc<InMemoryKeyValueStore>, EmployeeCache),
    ) {
        let (_, cache) = before_each;
        let first = CachedEmployee {
            id: "1".into(),
            name: "John Doe".into(),
            property_id: "p".into(),
            is_active: true,
        };
        let second = CachedEmployee {
            id: "2".into(),
            is_active: false,
            ..first.clone()
        };
        cache.store_employees(&[first]).await.unwrap();
        cache.store_employees(&[second.clone()]).await.unwrap();
        assert_eq!(cache.stored_employees().await.unwrap(), vec![second]);
    }
}
