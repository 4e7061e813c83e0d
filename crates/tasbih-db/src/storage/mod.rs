//! # Key-Value Storage
//!
//! The storage boundary the store is built on: string values under string
//! keys, read and written whole.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  TasbihStore<S: KeyValueStorage>                                       │
//! │       │                                                                 │
//! │       ├── SqliteStorage  ← key_value_storage table, durable            │
//! │       │                                                                 │
//! │       └── MemoryStorage  ← HashMap behind a RwLock, tests and previews │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;

use crate::error::DbResult;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Async string key-value storage.
///
/// Implementations must treat each call as a whole-value operation: no
/// partial writes, and `get_item` after `set_item` returns the full value.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value under `key`, or `None` if it was never written or was
    /// removed.
    async fn get_item(&self, key: &str) -> DbResult<Option<String>>;

    /// Overwrites the value under `key`.
    async fn set_item(&self, key: &str, value: String) -> DbResult<()>;

    /// Deletes `key`. Removing an absent key succeeds.
    async fn remove_item(&self, key: &str) -> DbResult<()>;
}
