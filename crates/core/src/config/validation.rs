//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::{AppConfig, DEFAULT_SECRET_SALT, StorageKind};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// The salt is opaque and never rejected, but a weak salt is logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `storage_type` is `file` and
    /// `storage_file` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_type == StorageKind::File && self.storage_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_file".into(),
                reason: "must not be empty when storage_type is file".into(),
            });
        }

        if self.secret_salt.is_empty() {
            tracing::warn!("secret_salt is empty; digests are plain SHA-256 of the content");
        } else if self.secret_salt == DEFAULT_SECRET_SALT {
            tracing::warn!("secret_salt is the built-in default; set HASHSTASH_SECRET_SALT");
        }

        Ok(())
    }
}
