//! In-memory storage backend.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::StorageBackend;
use crate::Error;

/// In-memory store backed by a `RwLock<HashMap>`.
///
/// Nothing is persisted; entries are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl StorageBackend for MemoryStorage {
    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.write().await.insert(key.to_owned(), value.to_owned());
        debug!(key, size = value.len(), "stored entry in memory");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn has(&self, key: &str) -> Result<bool, Error> {
        Ok(self.entries.read().await.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<bool, Error> {
        let removed = self.entries.write().await.remove(key).is_some();
        if removed {
            debug!(key, "deleted entry from memory");
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), Error> {
        self.entries.write().await.clear();
        Ok(())
    }
}
