//! Content-addressed store and lookup.
//!
//! Composes a [`SaltedHasher`] with a storage backend: text is stored under
//! its own salted digest and looked up by that digest.

use std::sync::Arc;

use crate::Error;
use crate::hash::SaltedHasher;
use crate::storage::{Storage, StorageBackend};

/// Stores text under its salted digest.
///
/// Stateless apart from the shared backend handle; cloning is cheap.
#[derive(Debug)]
pub struct ContentService<S = Storage> {
    storage: Arc<S>,
    hasher: SaltedHasher,
}

impl<S> Clone for ContentService<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage), hasher: self.hasher.clone() }
    }
}

impl<S: StorageBackend> ContentService<S> {
    pub fn new(storage: Arc<S>, hasher: SaltedHasher) -> Self {
        Self { storage, hasher }
    }

    /// Store `text` and return its digest.
    ///
    /// Storing the same text again yields the same digest and rewrites an
    /// equal value.
    pub async fn store_content(&self, text: &str) -> Result<String, Error> {
        let digest = self.hasher.digest(text);
        self.storage.set(&digest, text).await?;
        Ok(digest)
    }

    /// Text stored under `digest`, or `None` if it was never stored.
    ///
    /// The digest shape is not checked here; see [`crate::hash::is_valid_digest`].
    pub async fn retrieve_content(&self, digest: &str) -> Result<Option<String>, Error> {
        self.storage.get(digest).await
    }

    /// The hasher used for storage keys, shared with the generic-hash operation.
    pub fn hasher(&self) -> &SaltedHasher {
        &self.hasher
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
