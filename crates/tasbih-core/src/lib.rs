//! # tasbih-core: Pure Domain Rules for Tasbih Counters
//!
//! This crate holds the record type shared by every layer, the counter
//! rules the full-screen counter relies on, and the validation the creation
//! modal runs before handing a new counter to the store.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tasbih Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile UI (out of tree)                      │   │
//! │  │    List Screen ──► Counter View ──► Add Modal                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tasbih-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌─────────────┐  ┌─────────────┐              │   │
//! │  │   │   types   │  │ validation  │  │ suggestions │              │   │
//! │  │   │  Tasbih   │  │ parse_target│  │  catalog    │              │   │
//! │  │   │  Draft    │  │  required   │  │  available  │              │   │
//! │  │   └───────────┘  └─────────────┘  └─────────────┘              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tasbih-db (Storage Layer)                       │   │
//! │  │          key-value storage, TasbihStore, migrations             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Tasbih`, `TasbihDraft`, `CounterStep`
//! - [`validation`] - Field validators and target parsing
//! - [`suggestions`] - Built-in catalog of common adhkar
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tasbih_core::{CounterStep, TasbihDraft};
//!
//! let draft = TasbihDraft {
//!     arabic: "سُبْحَانَ اللهِ".to_string(),
//!     transliteration: "SubhanAllah".to_string(),
//!     translation: "Glory be to Allah".to_string(),
//!     target: "3".to_string(),
//! };
//!
//! let mut tasbih = draft.into_tasbih().unwrap();
//! assert_eq!(tasbih.count, 0);
//!
//! tasbih.increment();
//! tasbih.increment();
//! assert_eq!(tasbih.increment(), CounterStep::Completed { count: 3 });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod suggestions;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use suggestions::Suggestion;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the collection lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "tasbihat";

/// Target used when the creation form leaves the target field blank.
///
/// 33 is the conventional count for the post-prayer adhkar.
pub const DEFAULT_TARGET: u32 = 33;

/// Largest target the creation form accepts.
pub const MAX_TARGET: u32 = 100_000;

/// Maximum length, in characters, of each text field on a counter.
pub const MAX_TEXT_LENGTH: usize = 500;
