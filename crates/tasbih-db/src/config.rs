//! # Configuration
//!
//! Where the database lives and which key the collection uses.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TASBIH_DB_PATH=/data/tasbih.db                                     │
//! │     TASBIH_STORAGE_KEY=tasbihat                                        │
//! │     TASBIH_MAX_CONNECTIONS=2                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/tasbih/tasbih.toml (Linux)                               │
//! │     ~/Library/Application Support/com.tasbih.app/tasbih.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [database]
//! path = "/data/tasbih.db"
//! max_connections = 2
//!
//! [store]
//! key = "tasbihat"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::pool::DbConfig;
use tasbih_core::DEFAULT_STORAGE_KEY;

const CONFIG_FILE_NAME: &str = "tasbih.toml";
const DB_FILE_NAME: &str = "tasbih.db";

// =============================================================================
// Sections
// =============================================================================

/// `[database]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file path.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    /// Pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> PathBuf {
    directories::ProjectDirs::from("com", "tasbih", "app")
        .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Storage key holding the collection.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            key: default_storage_key(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`tasbih.toml`), if it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> DbResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> DbResult<()> {
        if self.store.key.trim().is_empty() {
            return Err(DbError::InvalidConfig("store.key must not be empty".into()));
        }

        if self.database.max_connections == 0 {
            return Err(DbError::InvalidConfig(
                "database.max_connections must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Builds the pool configuration.
    pub fn to_db_config(&self) -> DbConfig {
        DbConfig::new(self.database.path.clone()).max_connections(self.database.max_connections)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("TASBIH_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = PathBuf::from(path);
        }

        if let Ok(key) = std::env::var("TASBIH_STORAGE_KEY") {
            debug!(key = %key, "Overriding storage key from environment");
            self.store.key = key;
        }

        if let Ok(max) = std::env::var("TASBIH_MAX_CONNECTIONS") {
            match max.parse::<u32>() {
                Ok(n) => self.database.max_connections = n,
                Err(_) => warn!(value = %max, "Ignoring invalid TASBIH_MAX_CONNECTIONS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tasbih", "app")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store.key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.database.max_connections, 5);
        assert!(config.database.path.ends_with(DB_FILE_NAME));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.store.key = "  ".to_string();
        assert!(matches!(config.validate(), Err(DbError::InvalidConfig(_))));

        config.store.key = "tasbihat".to_string();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [store]
            key = "evening"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.key, "evening");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("tasbih-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[database]\npath = \"/tmp/custom.db\"\nmax_connections = 2\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(path)).unwrap();
        // Env may override these on a developer machine; only assert when unset
        if std::env::var("TASBIH_DB_PATH").is_err() {
            assert_eq!(config.database.path, PathBuf::from("/tmp/custom.db"));
        }
        if std::env::var("TASBIH_MAX_CONNECTIONS").is_err() {
            assert_eq!(config.to_db_config().max_connections, 2);
        }

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = std::env::temp_dir().join(format!("tasbih-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[database\n").unwrap();

        assert!(matches!(
            AppConfig::load(Some(path.clone())),
            Err(DbError::ConfigLoadFailed(_))
        ));
        let config = AppConfig::load_or_default(Some(path));
        assert_eq!(config.database.max_connections, 5);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[database]"));
        assert!(toml_str.contains("[store]"));
    }
}
