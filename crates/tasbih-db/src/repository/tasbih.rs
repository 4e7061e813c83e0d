//! # Tasbih Store
//!
//! Sole authority over the persisted list of counters.
//!
//! ## Read-Modify-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Every Mutating Operation                               │
//! │                                                                         │
//! │  acquire write lock (one per key per Database, shared by clones)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  get_item(key) ──► JSON array ──► Vec<Tasbih>                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  transform in memory (push / set count / retain / reset)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_item(key, whole array)  ← single write                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! - `list()` never fails: absent, unreadable, or malformed data all read as
//!   an empty collection (logged at `warn`).
//! - Mutations log and return storage failures. They also refuse to run on
//!   malformed data, so a corrupt value is never silently replaced by a
//!   one-element list. `clear_all()` is the recovery path.
//!
//! The write lock only orders callers inside this process; two processes
//! sharing the same database can still overwrite each other.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::{DbError, DbResult};
use crate::storage::KeyValueStorage;
use tasbih_core::validation::ensure_unique_arabic;
use tasbih_core::{Tasbih, TasbihDraft};

/// Store for the tasbih collection under one storage key.
///
/// Cloning is cheap and clones share the write lock. Stores handed out by
/// `Database::tasbihat` share one lock per key as well, so the counter view
/// and the list screen never interleave their read-modify-write cycles.
#[derive(Debug, Clone)]
pub struct TasbihStore<S> {
    storage: S,
    key: String,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStorage> TasbihStore<S> {
    /// Creates a store over `storage`, keeping the collection under `key`.
    ///
    /// The store gets a write lock of its own; only its clones share it.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self::with_lock(storage, key, Arc::new(Mutex::new(())))
    }

    /// Creates a store that serializes its writes on `write_lock`.
    ///
    /// Every store over the same storage and key must be given the same
    /// lock, otherwise concurrent updates can overwrite each other.
    pub fn with_lock(storage: S, key: impl Into<String>, write_lock: Arc<Mutex<()>>) -> Self {
        TasbihStore {
            storage,
            key: key.into(),
            write_lock,
        }
    }

    /// The storage key the collection lives under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns every counter in insertion order.
    ///
    /// Never fails. Absent, unreadable, or malformed data reads as empty.
    pub async fn list(&self) -> Vec<Tasbih> {
        match self.load().await {
            Ok(tasbihat) => tasbihat,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read tasbihat, returning empty list");
                Vec::new()
            }
        }
    }

    /// Strict read: like [`list`](Self::list), but reports storage faults and
    /// malformed data instead of hiding them.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - nothing was ever persisted (or it was cleared)
    /// * `Err(DbError::Corrupted)` - a value exists but is not a valid list
    /// * `Err(DbError::Storage)` - the storage could not be read
    pub async fn load(&self) -> DbResult<Vec<Tasbih>> {
        let Some(json) = self.storage.get_item(&self.key).await? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&json).map_err(|e| DbError::corrupted(&self.key, e.to_string()))
    }

    /// Finds a single counter by id.
    ///
    /// Used by the counter view; same fail-open policy as `list()`.
    pub async fn get(&self, id: &str) -> Option<Tasbih> {
        self.list().await.into_iter().find(|t| t.id == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a new counter.
    ///
    /// The caller supplies the id and a zero count (see
    /// `TasbihDraft::into_tasbih`); the store does not generate ids.
    ///
    /// ## Errors
    /// * `DbError::DuplicateEntry` - a counter with the same Arabic text
    ///   exists; nothing is written
    /// * `DbError::Corrupted` / `DbError::Storage` - see module docs
    pub async fn insert(&self, tasbih: Tasbih) -> DbResult<Tasbih> {
        let inserted = tasbih.clone();

        self.mutate("insert", move |all| {
            ensure_unique_arabic(all, &tasbih.arabic)?;
            all.push(tasbih);
            Ok(())
        })
        .await?;

        info!(id = %inserted.id, target = inserted.target, "Tasbih added");
        Ok(inserted)
    }

    /// Validates a draft from the creation modal and inserts the result.
    ///
    /// ## Errors
    /// * `DbError::Validation` - a required field is empty or the target text
    ///   is not a valid number; nothing is written
    /// * `DbError::DuplicateEntry` - as for [`insert`](Self::insert)
    pub async fn insert_draft(&self, draft: TasbihDraft) -> DbResult<Tasbih> {
        let tasbih = draft.into_tasbih().map_err(|e| {
            warn!(key = %self.key, error = %e, "Tasbih draft rejected");
            DbError::from(e)
        })?;

        self.insert(tasbih).await
    }

    /// Sets the count of the counter with `id`.
    ///
    /// An unknown id is not an error; the collection is written back
    /// unchanged.
    pub async fn update_count(&self, id: &str, new_count: u32) -> DbResult<()> {
        self.mutate("update_count", |all| {
            match all.iter_mut().find(|t| t.id == id) {
                Some(tasbih) => tasbih.count = new_count,
                None => debug!(id = %id, "update_count: no tasbih with this id"),
            }
            Ok(())
        })
        .await
    }

    /// Removes the counter with `id`. No-op if absent.
    pub async fn remove(&self, id: &str) -> DbResult<()> {
        self.mutate("remove", |all| {
            let before = all.len();
            all.retain(|t| t.id != id);
            if all.len() == before {
                debug!(id = %id, "remove: no tasbih with this id");
            }
            Ok(())
        })
        .await
    }

    /// Sets every count back to zero, keeping all other fields and the order.
    pub async fn reset_all_counts(&self) -> DbResult<()> {
        self.mutate("reset_all_counts", |all| {
            all.iter_mut().for_each(Tasbih::reset);
            Ok(())
        })
        .await
    }

    /// Deletes the storage key itself.
    ///
    /// Works even when the stored value is corrupted.
    pub async fn clear_all(&self) -> DbResult<()> {
        let _guard = self.write_lock.lock().await;

        self.storage.remove_item(&self.key).await.map_err(|e| {
            error!(key = %self.key, error = %e, "Failed to clear tasbihat");
            e
        })?;

        info!(key = %self.key, "All tasbihat cleared");
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Runs one read-modify-write cycle under the write lock.
    async fn mutate<F>(&self, op: &'static str, apply: F) -> DbResult<()>
    where
        F: FnOnce(&mut Vec<Tasbih>) -> DbResult<()>,
    {
        let _guard = self.write_lock.lock().await;

        let mut all = self.load().await.map_err(|e| {
            error!(op, key = %self.key, error = %e, "Failed to read tasbihat");
            e
        })?;

        if let Err(e) = apply(&mut all) {
            warn!(op, key = %self.key, error = %e, "Tasbih operation rejected");
            return Err(e);
        }

        self.write(&all).await.map_err(|e| {
            error!(op, key = %self.key, error = %e, "Failed to write tasbihat");
            e
        })?;

        debug!(op, key = %self.key, len = all.len(), "Tasbihat persisted");
        Ok(())
    }

    async fn write(&self, all: &[Tasbih]) -> DbResult<()> {
        let json = serde_json::to_string(all).map_err(|e| DbError::Serialization(e.to_string()))?;
        self.storage.set_item(&self.key, json).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
