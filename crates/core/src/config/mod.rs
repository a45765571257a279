//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (HASHSTASH_*)
//! 2. TOML config file (if HASHSTASH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Salt used when none is configured. Digests produced with it are predictable.
pub const DEFAULT_SECRET_SALT: &str = "default-secret-salt";

/// Which storage backend to construct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Process-lifetime map, lost on exit.
    #[default]
    Memory,
    /// JSON snapshot file at `storage_file`.
    File,
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (HASHSTASH_*)
/// 2. TOML config file (if HASHSTASH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Secret salt appended to every digest input.
    ///
    /// Set via HASHSTASH_SECRET_SALT environment variable.
    #[serde(default = "default_secret_salt")]
    pub secret_salt: String,

    /// Storage backend kind: "memory" or "file".
    ///
    /// Set via HASHSTASH_STORAGE_TYPE environment variable.
    #[serde(default)]
    pub storage_type: StorageKind,

    /// Snapshot path for the file backend.
    ///
    /// Set via HASHSTASH_STORAGE_FILE environment variable.
    /// Parent directories are created on first use.
    #[serde(default = "default_storage_file")]
    pub storage_file: PathBuf,
}

fn default_secret_salt() -> String {
    DEFAULT_SECRET_SALT.into()
}

fn default_storage_file() -> PathBuf {
    PathBuf::from("./data/storage.json")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_salt: default_secret_salt(),
            storage_type: StorageKind::default(),
            storage_file: default_storage_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `HASHSTASH_`
    /// 2. TOML file from `HASHSTASH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed (e.g. unknown storage type)
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::figment())
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("HASHSTASH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("HASHSTASH_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }

    fn load_from(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.secret_salt, "default-secret-salt");
        assert_eq!(config.storage_type, StorageKind::Memory);
        assert_eq!(config.storage_file, PathBuf::from("./data/storage.json"));
    }

    #[test]
    fn test_load_from_toml() {
        let figment = Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::string(
            r#"
            secret_salt = "pepper"
            storage_type = "file"
            storage_file = "/tmp/hashstash/store.json"
            "#,
        ));

        let config = AppConfig::load_from(figment).unwrap();
        assert_eq!(config.secret_salt, "pepper");
        assert_eq!(config.storage_type, StorageKind::File);
        assert_eq!(config.storage_file, PathBuf::from("/tmp/hashstash/store.json"));
    }

    #[test]
    fn test_load_rejects_unknown_storage_type() {
        let figment =
            Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::string(r#"storage_type = "redis""#));

        let result = AppConfig::load_from(figment);
        assert!(matches!(result, Err(ConfigError::LoadFailed(_))));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let figment =
            Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::string(r#"secret_salt = "s""#));

        let config = AppConfig::load_from(figment).unwrap();
        assert_eq!(config.secret_salt, "s");
        assert_eq!(config.storage_type, StorageKind::Memory);
    }
}
