//! # tasbih-db: Storage Layer for Tasbih
//!
//! Persists the tasbih collection as one JSON array under one key of a
//! key-value storage, backed by SQLite on device.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tasbih Data Flow                                 │
//! │                                                                         │
//! │  Counter View tap                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tasbih-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  TasbihStore  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (repository/) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ read-modify-  │    │ 001_kv.sql   │  │   │
//! │  │   │               │    │ write on key  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   key_value_storage: "tasbihat" → [{"id":..,"arabic":..}, ..]   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`storage`] - Key-value storage trait and backends
//! - [`repository`] - `TasbihStore`
//! - [`config`] - File and environment configuration
//! - [`error`] - Error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tasbih_db::{AppConfig, Database};
//!
//! let config = AppConfig::load_or_default(None);
//! let db = Database::new(config.to_db_config()).await?;
//!
//! let store = db.tasbihat_with_key(config.store.key);
//! store.insert_draft(draft).await?;
//! store.update_count(&id, 12).await?;
//! let tasbihat = store.list().await;
//! ```
//!
//! Tests and previews can skip SQLite entirely:
//!
//! ```rust
//! use tasbih_core::{Tasbih, DEFAULT_STORAGE_KEY};
//! use tasbih_db::{MemoryStorage, TasbihStore};
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! rt.block_on(async {
//!     let store = TasbihStore::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
//!     store
//!         .insert(Tasbih::new("1", "سُبْحَانَ اللهِ", "SubhanAllah", "Glory be to Allah", 33))
//!         .await
//!         .unwrap();
//!     store.update_count("1", 33).await.unwrap();
//!     assert_eq!(store.list().await[0].count, 33);
//! });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::AppConfig;
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::tasbih::TasbihStore;
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
