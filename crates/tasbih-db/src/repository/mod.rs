//! # Repository Module
//!
//! Store implementations on top of key-value storage.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  List Screen / Counter View / Add Modal                                │
//! │       │                                                                 │
//! │       │  db.tasbihat().update_count(id, 12)                            │
//! │       ▼                                                                 │
//! │  TasbihStore                                                           │
//! │  ├── list() / load() / get(id)                                         │
//! │  ├── insert(tasbih) / insert_draft(draft)                              │
//! │  ├── update_count(id, n) / reset_all_counts()                          │
//! │  └── remove(id) / clear_all()                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  KeyValueStorage (SQLite or memory)                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`tasbih::TasbihStore`] - The tasbih collection

pub mod tasbih;
