//! Key/value storage backends for digest → content entries.
//!
//! Two backends implement [`StorageBackend`]:
//!
//! - [`MemoryStorage`]: process-lifetime map behind a `RwLock`.
//! - [`JsonFileStorage`]: the same map mirrored to a pretty-printed JSON
//!   snapshot that is rewritten on every mutation.
//!
//! [`Storage`] is the closed set of both, built from [`AppConfig`].

pub mod json_file;
pub mod memory;

use crate::Error;
use crate::config::{AppConfig, StorageKind};

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// String key/value storage.
///
/// A missing key is never an error: `get` returns `None` and `delete` returns `false`.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Insert or overwrite `key`. Durable once this returns.
    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Whether `key` is present.
    async fn has(&self, key: &str) -> Result<bool, Error>;

    /// Remove `key`. Returns true iff it existed.
    async fn delete(&self, key: &str) -> Result<bool, Error>;

    /// Remove every entry.
    async fn clear(&self) -> Result<(), Error>;
}

/// The configured storage backend.
#[derive(Debug)]
pub enum Storage {
    Memory(MemoryStorage),
    JsonFile(JsonFileStorage),
}

impl Storage {
    /// Build the backend selected by `config.storage_type`.
    ///
    /// The file backend does not touch the disk until its first operation.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.storage_type {
            StorageKind::Memory => Storage::Memory(MemoryStorage::new()),
            StorageKind::File => Storage::JsonFile(JsonFileStorage::new(&config.storage_file)),
        }
    }

    pub fn kind(&self) -> StorageKind {
        match self {
            Storage::Memory(_) => StorageKind::Memory,
            Storage::JsonFile(_) => StorageKind::File,
        }
    }
}

#[async_trait::async_trait]
impl StorageBackend for Storage {
    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        match self {
            Storage::Memory(s) => s.set(key, value).await,
            Storage::JsonFile(s) => s.set(key, value).await,
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match self {
            Storage::Memory(s) => s.get(key).await,
            Storage::JsonFile(s) => s.get(key).await,
        }
    }

    async fn has(&self, key: &str) -> Result<bool, Error> {
        match self {
            Storage::Memory(s) => s.has(key).await,
            Storage::JsonFile(s) => s.has(key).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, Error> {
        match self {
            Storage::Memory(s) => s.delete(key).await,
            Storage::JsonFile(s) => s.delete(key).await,
        }
    }

    async fn clear(&self) -> Result<(), Error> {
        match self {
            Storage::Memory(s) => s.clear().await,
            Storage::JsonFile(s) => s.clear().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_config_memory() {
        let storage = Storage::from_config(&AppConfig::default());
        assert_eq!(storage.kind(), StorageKind::Memory);
    }

    #[tokio::test]
    async fn test_from_config_file_is_lazy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");
        let config = AppConfig { storage_type: StorageKind::File, storage_file: path.clone(), ..Default::default() };

        let storage = Storage::from_config(&config);
        assert_eq!(storage.kind(), StorageKind::File);
        assert!(!path.exists());

        storage.set("key1", "value1").await.unwrap();
        assert!(path.exists());
        assert_eq!(storage.get("key1").await.unwrap().as_deref(), Some("value1"));
    }

    #[tokio::test]
    async fn test_dispatch_covers_all_operations() {
        let storage = Storage::Memory(MemoryStorage::new());
        storage.set("k", "v").await.unwrap();
        assert!(storage.has("k").await.unwrap());
        assert!(storage.delete("k").await.unwrap());
        assert!(!storage.delete("k").await.unwrap());
        storage.set("k", "v").await.unwrap();
        storage.clear().await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), None);
    }
}
