//! In-memory State Storage Adapter, used by tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{StateStorage, StateStorageError};

/// HashMap-backed storage with no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStateStorage {
    records: Mutex<HashMap<String, serde_json::Value>>,
}

impl InMemoryStateStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record synchronously, for test setup.
    pub fn seed(&self, key: &str, value: serde_json::Value) {
        self.records
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value);
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn save(&self, key: &str, value: &serde_json::Value) -> Result<(), StateStorageError> {
        self.records
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>, StateStorageError> {
        Ok(self
            .records
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned())
    }

    async fn exists(&self, key: &str) -> Result<bool, StateStorageError> {
        Ok(self
            .records
            .lock()
            .expect("storage mutex poisoned")
            .contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<(), StateStorageError> {
        self.records
            .lock()
            .expect("storage mutex poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_load_delete_cycle() {
        let storage = InMemoryStateStorage::new();

        storage.save("a", &json!({"x": 1})).await.unwrap();
        assert!(storage.exists("a").await.unwrap());
        assert_eq!(storage.load("a").await.unwrap(), Some(json!({"x": 1})));

        storage.delete("a").await.unwrap();
        assert_eq!(storage.load("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn seed_makes_records_visible() {
        let storage = InMemoryStateStorage::new();
        storage.seed("b", json!("seeded"));
        assert_eq!(storage.load("b").await.unwrap(), Some(json!("seeded")));
    }
}
