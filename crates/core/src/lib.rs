//! Core types and shared functionality for hashstash.
//!
//! This crate provides:
//! - Salted SHA-256 digests for text and JSON values
//! - Storage backends (in-memory and JSON snapshot file)
//! - The content service composing the two
//! - Unified error types
//! - Configuration structures

pub mod config;
pub mod error;
pub mod hash;
pub mod service;
pub mod storage;

pub use config::{AppConfig, ConfigError, StorageKind};
pub use error::Error;
pub use hash::{SaltedHasher, hash_with_salt, is_valid_digest, is_valid_payload};
pub use service::ContentService;
pub use storage::{JsonFileStorage, MemoryStorage, Storage, StorageBackend};
