//! # Storage Error Types
//!
//! Error types for storage and store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) / malformed JSON / duplicate Arabic        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ├── list()      → logged and swallowed, empty collection         │
//! │       │                                                                 │
//! │       └── mutations   → logged and returned to the caller              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tasbih_core::CoreError;
use thiserror::Error;

/// Storage and store errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A counter with the same Arabic text already exists.
    ///
    /// ## When This Occurs
    /// - `insert` with Arabic text matching an existing record exactly
    ///
    /// The user is expected to edit the text and retry.
    #[error("Duplicate entry: '{arabic}' already exists")]
    DuplicateEntry { arabic: String },

    /// A draft failed domain validation.
    ///
    /// ## When This Occurs
    /// - `TasbihStore::insert_draft` with an empty required field or an
    ///   unparseable target; nothing is written
    #[error("Invalid tasbih: {0}")]
    Validation(String),

    /// The underlying key-value storage failed to read or write.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// The persisted value exists but is not a valid collection.
    ///
    /// ## When This Occurs
    /// - Value truncated by a crash mid-write
    /// - Value written by an incompatible client
    #[error("Stored value under '{key}' is corrupted: {reason}")]
    Corrupted { key: String, reason: String },

    /// The collection could not be encoded before writing.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Configuration values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file exists but could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),
}

impl DbError {
    /// Creates a DuplicateEntry error.
    pub fn duplicate(arabic: impl Into<String>) -> Self {
        DbError::DuplicateEntry {
            arabic: arabic.into(),
        }
    }

    /// Creates a Corrupted error for the given storage key.
    pub fn corrupted(key: impl Into<String>, reason: impl Into<String>) -> Self {
        DbError::Corrupted {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True for failures of the storage medium itself, as opposed to
    /// rejected input or bad data.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            DbError::Storage(_) | DbError::ConnectionFailed(_) | DbError::PoolExhausted
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Storage
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            sqlx::Error::Database(db_err) => DbError::Storage(db_err.message().to_string()),
            _ => DbError::Storage(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

impl From<std::io::Error> for DbError {
    fn from(err: std::io::Error) -> Self {
        DbError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for DbError {
    fn from(err: toml::de::Error) -> Self {
        DbError::ConfigLoadFailed(err.to_string())
    }
}

impl From<CoreError> for DbError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DuplicateArabic(arabic) => DbError::DuplicateEntry { arabic },
            CoreError::Validation(e) => DbError::Validation(e.to_string()),
        }
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tasbih_core::ValidationError;

    #[test]
    fn test_error_messages() {
        let err = DbError::duplicate("سُبْحَانَ اللهِ");
        assert_eq!(err.to_string(), "Duplicate entry: 'سُبْحَانَ اللهِ' already exists");

        let err = DbError::corrupted("tasbihat", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Stored value under 'tasbihat' is corrupted: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_core_duplicate_maps_to_duplicate_entry() {
        let err: DbError = CoreError::DuplicateArabic("x".to_string()).into();
        assert!(matches!(err, DbError::DuplicateEntry { arabic } if arabic == "x"));
    }

    #[test]
    fn test_core_validation_maps_to_validation() {
        let err: DbError = CoreError::Validation(ValidationError::Required {
            field: "arabic".to_string(),
        })
        .into();
        assert!(matches!(err, DbError::Validation(ref msg) if msg.contains("arabic")));
    }

    #[test]
    fn test_storage_failure_classification() {
        assert!(DbError::Storage("disk full".into()).is_storage_failure());
        assert!(DbError::PoolExhausted.is_storage_failure());
        assert!(!DbError::duplicate("x").is_storage_failure());
        assert!(!DbError::corrupted("k", "r").is_storage_failure());
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
    }
}
