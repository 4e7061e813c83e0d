//! # SQLite Storage Backend
//!
//! Durable key-value storage on a single SQLite table.
//!
//! ## Schema
//! ```text
//! key_value_storage
//! ├── key   TEXT PRIMARY KEY
//! └── value TEXT NOT NULL
//! ```
//!
//! Each call is a single statement, so SQLite's own per-statement atomicity
//! is what makes `set_item` all-or-nothing.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::KeyValueStorage;
use crate::error::DbResult;

/// Storage backed by the `key_value_storage` table.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage on an already-migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStorage { pool }
    }

    /// Lists every stored key, sorted.
    ///
    /// ## Usage
    /// Diagnostics only; the store never enumerates keys.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> =
            sqlx::query_scalar("SELECT key FROM key_value_storage ORDER BY key")
                .fetch_all(&self.pool)
                .await?;

        Ok(keys)
    }
}

#[async_trait]
impl KeyValueStorage for SqliteStorage {
    async fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM key_value_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    async fn set_item(&self, key: &str, value: String) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing storage key");

        sqlx::query(
            r#"
            INSERT INTO key_value_storage (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> DbResult<()> {
        debug!(key = %key, "Removing storage key");

        sqlx::query("DELETE FROM key_value_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn storage() -> SqliteStorage {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.storage()
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let storage = storage().await;
        assert_eq!(storage.get_item("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let storage = storage().await;

        storage.set_item("k", "[]".to_string()).await.unwrap();
        storage.set_item("k", "[1]".to_string()).await.unwrap();

        assert_eq!(storage.get_item("k").await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(storage.keys().await.unwrap(), vec!["k".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_deletes_row() {
        let storage = storage().await;

        storage.set_item("a", "1".to_string()).await.unwrap();
        storage.set_item("b", "2".to_string()).await.unwrap();
        storage.remove_item("a").await.unwrap();

        assert_eq!(storage.get_item("a").await.unwrap(), None);
        assert_eq!(storage.keys().await.unwrap(), vec!["b".to_string()]);

        // Absent key
        storage.remove_item("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_unicode_values() {
        let storage = storage().await;
        let value = r#"[{"arabic":"سُبْحَانَ اللهِ"}]"#.to_string();

        storage.set_item("tasbihat", value.clone()).await.unwrap();
        assert_eq!(storage.get_item("tasbihat").await.unwrap(), Some(value));
    }
}
