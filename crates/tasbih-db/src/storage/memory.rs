//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::KeyValueStorage;
use crate::error::DbResult;

/// HashMap-backed storage.
///
/// Clones share the same map, so a store rebuilt over a clone sees what the
/// previous store wrote (the in-memory stand-in for an app restart).
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> DbResult<()> {
        self.items.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> DbResult<()> {
        self.items.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").await.unwrap(), None);

        storage.set_item("k", "v1".to_string()).await.unwrap();
        storage.set_item("k", "v2".to_string()).await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len().await, 1);

        storage.remove_item("k").await.unwrap();
        assert_eq!(storage.get_item("k").await.unwrap(), None);
        assert_eq!(storage.len().await, 0);

        // Removing again is fine
        storage.remove_item("k").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_items() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.set_item("shared", "x".to_string()).await.unwrap();
        assert_eq!(b.get_item("shared").await.unwrap().as_deref(), Some("x"));
    }
}
