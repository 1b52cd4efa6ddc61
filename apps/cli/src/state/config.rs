//! # Configuration State
//!
//! Where the inventory is stored, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Config file (`--config`, else `<platform config dir>/stockroom.toml`)
//! 3. Defaults (this file)
//!
//! ## Example `stockroom.toml`
//! ```toml
//! storage = "sqlite"
//! database_path = "/var/lib/stockroom/stockroom.db"
//! storage_key = "@produtos_estoque"
//! busy_timeout_ms = 5000
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use stockroom_core::STORAGE_KEY;
use tracing::{debug, info, warn};

use crate::error::CliError;

/// Storage backend the inventory is persisted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SQLite file on disk.
    #[default]
    Sqlite,

    /// Process memory; nothing survives exit.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Sqlite => write!(f, "sqlite"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" | "file" => Ok(StorageBackend::Sqlite),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(CliError::config(format!(
                "Unknown storage backend: '{}'. Valid options: sqlite, memory",
                other
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Backend to open at startup
    pub storage: StorageBackend,

    /// SQLite file; `None` means the platform data directory
    pub database_path: Option<PathBuf>,

    /// Key the product collection is stored under
    pub storage_key: String,

    /// How long a SQLite write waits on another process's lock
    pub busy_timeout_ms: u64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            storage: StorageBackend::Sqlite,
            database_path: None,
            storage_key: STORAGE_KEY.to_string(),
            busy_timeout_ms: 5000,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file and environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, CliError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e.message);
            Self::default()
        })
    }

    /// Parses a TOML document; missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents)
            .map_err(|e| CliError::config(format!("Invalid config file: {}", e)))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.storage_key.trim().is_empty() {
            return Err(CliError::config("storage_key must not be empty"));
        }

        Ok(())
    }

    /// The SQLite file to open.
    ///
    /// Falls back to `<platform data dir>/stockroom.db`, creating the
    /// directory if needed.
    pub fn resolved_database_path(&self) -> Result<PathBuf, CliError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("com", "stockroom", "stockroom")
            .ok_or_else(|| CliError::config("Could not determine app data directory"))?;

        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join("stockroom.db"))
    }

    /// Applies `STOCKROOM_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), CliError> {
        if let Some(storage) = lookup("STOCKROOM_STORAGE") {
            debug!(storage = %storage, "Overriding storage backend from environment");
            self.storage = storage.parse()?;
        }

        if let Some(path) = lookup("STOCKROOM_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("STOCKROOM_STORAGE_KEY") {
            self.storage_key = key;
        }

        if let Some(ms) = lookup("STOCKROOM_BUSY_TIMEOUT_MS") {
            self.busy_timeout_ms = ms.trim().parse().map_err(|_| {
                CliError::config(format!("STOCKROOM_BUSY_TIMEOUT_MS is not a number: '{}'", ms))
            })?;
        }

        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join("stockroom.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorCode;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.database_path, None);
        assert_eq!(config.storage_key, "@produtos_estoque");
        assert_eq!(config.busy_timeout_ms, 5000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConfigState::from_toml("storage = \"memory\"").unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.storage_key, STORAGE_KEY);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = ConfigState::from_toml("storage = \"floppy\"").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = ConfigState::from_toml("storage_key = \"from-file\"").unwrap();
        config
            .apply_overrides(env(&[
                ("STOCKROOM_STORAGE", "MEMORY"),
                ("STOCKROOM_DB_PATH", "/tmp/inv.db"),
                ("STOCKROOM_STORAGE_KEY", "from-env"),
            ]))
            .unwrap();

        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/inv.db")));
        assert_eq!(config.storage_key, "from-env");
    }

    #[test]
    fn test_busy_timeout_from_file_and_env() {
        let mut config = ConfigState::from_toml("busy_timeout_ms = 750").unwrap();
        assert_eq!(config.busy_timeout_ms, 750);

        config
            .apply_overrides(env(&[("STOCKROOM_BUSY_TIMEOUT_MS", " 1200 ")]))
            .unwrap();
        assert_eq!(config.busy_timeout_ms, 1200);

        let err = config
            .apply_overrides(env(&[("STOCKROOM_BUSY_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_unknown_backend_in_env() {
        let mut config = ConfigState::default();
        let err = config
            .apply_overrides(env(&[("STOCKROOM_STORAGE", "tape")]))
            .unwrap_err();
        assert!(err.message.contains("tape"));
    }

    #[test]
    fn test_blank_key_rejected() {
        let config = ConfigState {
            storage_key: "   ".to_string(),
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("stockroom-config-that-does-not-exist.toml");
        let config = ConfigState::load_or_default(Some(path));
        assert_eq!(config.storage_key, STORAGE_KEY);
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let config = ConfigState {
            database_path: Some(PathBuf::from("inventory.db")),
            ..ConfigState::default()
        };
        assert_eq!(
            config.resolved_database_path().unwrap(),
            PathBuf::from("inventory.db")
        );
    }
}
