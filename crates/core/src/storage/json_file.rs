//! JSON snapshot storage backend.
//!
//! The in-process map is the source of truth and the file is its mirror:
//! every mutation rewrites the whole snapshot before returning. The snapshot
//! is loaded lazily on the first operation.
//!
//! A missing file is created empty. A file that does not parse to a JSON
//! object is discarded and overwritten with an empty snapshot; no partial
//! recovery of its entries is attempted.

use std::collections::BTreeMap;
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

use super::StorageBackend;
use crate::Error;

type Entries = BTreeMap<String, String>;

/// File-backed store persisted as one pretty-printed JSON object.
///
/// Load, mutate and persist run on a spawned task that owns the state lock,
/// so a caller dropping its future cannot release the lock while a write is
/// in flight. Once a call returns, the file on disk equals the in-memory map.
/// Each write goes to its own temp file in the snapshot's directory, which is
/// synced and renamed over the snapshot.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    state: Arc<Mutex<FileState>>,
}

#[derive(Debug, Default)]
struct FileState {
    loaded: bool,
    entries: Entries,
}

impl JsonFileStorage {
    /// Create a store for the snapshot at `path`. No I/O happens here.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf(), state: Arc::new(Mutex::new(FileState::default())) }
    }

    /// Snapshot file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lock the state, loading the snapshot first if this instance has not yet.
    ///
    /// A failed load leaves `loaded` unset so the next call retries.
    async fn lock_loaded(&self) -> Result<OwnedMutexGuard<FileState>, Error> {
        let path = self.path.clone();
        let state = Arc::clone(&self.state);
        run_detached(async move {
            let mut state = state.lock_owned().await;
            if !state.loaded {
                state.entries = load(&path).await?;
                state.loaded = true;
            }
            Ok(state)
        })
        .await
    }
}

/// Run `task` to completion even if the awaiting caller is dropped.
async fn run_detached<T, F>(task: F) -> Result<T, Error>
where
    T: Send + 'static,
    F: Future<Output = Result<T, Error>> + Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| Error::Storage(std::io::Error::other(e)))?
}

async fn load(path: &Path) -> Result<Entries, Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "snapshot missing, creating empty store");
            let entries = Entries::new();
            persist(path, &entries).await?;
            return Ok(entries);
        }
        Err(e) => return Err(e.into()),
    };

    match parse_snapshot(&bytes) {
        Ok(entries) => {
            info!(path = %path.display(), entries = entries.len(), "loaded snapshot");
            Ok(entries)
        }
        Err(reason) => {
            warn!(path = %path.display(), error = %reason, "snapshot is not a JSON object, resetting to empty");
            let entries = Entries::new();
            persist(path, &entries).await?;
            Ok(entries)
        }
    }
}

async fn persist(path: &Path, entries: &Entries) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(entries)?;
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_atomic(&path, json.as_bytes()))
        .await
        .map_err(|e| Error::Storage(std::io::Error::other(e)))??;
    Ok(())
}

#[async_trait::async_trait]
impl StorageBackend for JsonFileStorage {
    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut state = self.lock_loaded().await?;
        let path = self.path.clone();
        let key = key.to_owned();
        let value = value.to_owned();
        run_detached(async move {
            let size = value.len();
            let previous = state.entries.insert(key.clone(), value);

            if let Err(e) = persist(&path, &state.entries).await {
                match previous {
                    Some(previous) => state.entries.insert(key, previous),
                    None => state.entries.remove(&key),
                };
                return Err(e);
            }

            debug!(key = %key, size, "stored entry in snapshot");
            Ok(())
        })
        .await
    }

    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let state = self.lock_loaded().await?;
        Ok(state.entries.get(key).cloned())
    }

    async fn has(&self, key: &str) -> Result<bool, Error> {
        let state = self.lock_loaded().await?;
        Ok(state.entries.contains_key(key))
    }

    async fn delete(&self, key: &str) -> Result<bool, Error> {
        let mut state = self.lock_loaded().await?;
        let path = self.path.clone();
        let key = key.to_owned();
        run_detached(async move {
            let Some(previous) = state.entries.remove(&key) else {
                return Ok(false);
            };

            if let Err(e) = persist(&path, &state.entries).await {
                state.entries.insert(key, previous);
                return Err(e);
            }

            debug!(key = %key, "deleted entry from snapshot");
            Ok(true)
        })
        .await
    }

    async fn clear(&self) -> Result<(), Error> {
        let mut state = self.lock_loaded().await?;
        let path = self.path.clone();
        run_detached(async move {
            let previous = std::mem::take(&mut state.entries);

            if let Err(e) = persist(&path, &state.entries).await {
                state.entries = previous;
                return Err(e);
            }

            debug!(removed = previous.len(), "cleared snapshot");
            Ok(())
        })
        .await
    }
}

/// Entries of a snapshot, or why it cannot be used.
///
/// Non-string values are kept as their compact JSON text.
fn parse_snapshot(bytes: &[u8]) -> Result<Entries, String> {
    match serde_json::from_slice::<Value>(bytes).map_err(|e| e.to_string())? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(text) => (key, text),
                other => (key, other.to_string()),
            })
            .collect()),
        Value::Array(_) => Err("expected a JSON object, found an array".into()),
        Value::Null => Err("expected a JSON object, found null".into()),
        _ => Err("expected a JSON object, found a scalar".into()),
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
