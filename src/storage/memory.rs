//! In-Memory Storage

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::types::*;

/// Storage backed by a map held in memory.
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a value already stored under `key`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut data = HashMap::new();
        data.insert(key.to_string(), value.to_string());
        Self { data: RwLock::new(data) }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v1").await.unwrap();
        storage.set_item("k", "v2").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_with_item() {
        let storage = MemoryStorage::with_item("k", "seeded");
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("seeded"));
    }
}
