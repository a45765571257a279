//! Subcommand handlers.
//!
//! Each handler returns the text to print so it can be tested without a terminal.

use clap::Args;
use hashstash_core::{
    ContentService, Error, SaltedHasher, Storage, StorageBackend, StorageKind, is_valid_digest, is_valid_payload,
};
use serde_json::Value;
use tokio::io::AsyncReadExt;

/// Arguments for the store subcommand.
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Text to store. Read from stdin when omitted.
    pub text: Option<String>,
}

/// Arguments for the get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// 64-character lowercase hex digest.
    pub digest: String,
}

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// JSON object to fingerprint, e.g. '{"name":"test"}'.
    pub json: String,
}

/// Store text and return its digest.
pub async fn store(service: &ContentService<Storage>, args: StoreArgs) -> Result<String, Error> {
    if service.storage().kind() == StorageKind::Memory {
        tracing::warn!("storage_type is memory; stored content is lost when hashstash exits");
    }

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| Error::InvalidInput(format!("Failed to read stdin: {e}")))?;
            buf
        }
    };

    store_text(service, &text).await
}

async fn store_text<S: StorageBackend>(service: &ContentService<S>, text: &str) -> Result<String, Error> {
    let digest = service.store_content(text).await?;
    tracing::debug!(%digest, size = text.len(), "stored content");
    Ok(digest)
}

/// Look up stored text. Malformed and unknown digests are both NOT_FOUND.
pub async fn get<S: StorageBackend>(service: &ContentService<S>, args: &GetArgs) -> Result<String, Error> {
    if !is_valid_digest(&args.digest) {
        return Err(Error::NotFound(args.digest.clone()));
    }

    service
        .retrieve_content(&args.digest)
        .await?
        .ok_or_else(|| Error::NotFound(args.digest.clone()))
}

/// Digest a JSON object without storing it.
pub fn hash(hasher: &SaltedHasher, args: &HashArgs) -> Result<String, Error> {
    let payload: Value =
        serde_json::from_str(&args.json).map_err(|e| Error::InvalidInput(format!("Invalid JSON: {e}")))?;

    if !is_valid_payload(&payload) {
        return Err(Error::InvalidPayload);
    }

    Ok(hasher.digest(&payload))
}
