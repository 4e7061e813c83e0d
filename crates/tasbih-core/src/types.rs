//! # Domain Types
//!
//! Core domain types shared by the store and its UI collaborators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Tasbih      │   │   TasbihDraft   │   │   CounterStep   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  arabic         │   │  Incremented    │       │
//! │  │  arabic (dedup) │   │  transliteration│   │  Completed      │       │
//! │  │  target / count │   │  target (text)  │   │  AlreadyComplete│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every counter has:
//! - `id`: opaque, immutable, used by update/remove
//! - `arabic`: human-readable, unique within the collection, used for dedup

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::validation::{parse_target, validate_text_field};

// =============================================================================
// Tasbih
// =============================================================================

/// A devotional repetition counter.
///
/// This is the exact shape persisted in the JSON collection, so field names
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tasbih {
    /// Unique identifier, assigned once at creation.
    pub id: String,

    /// Canonical counter text. Also the dedup key.
    pub arabic: String,

    /// Romanized reading.
    pub transliteration: String,

    /// Meaning in the user's language.
    pub translation: String,

    /// Count at which the counter is complete.
    pub target: u32,

    /// Current progress.
    pub count: u32,
}

impl Tasbih {
    /// Creates a counter with zero progress.
    ///
    /// The caller supplies the id; use [`TasbihDraft::into_tasbih`] to get a
    /// validated counter with a fresh one.
    pub fn new(
        id: impl Into<String>,
        arabic: impl Into<String>,
        transliteration: impl Into<String>,
        translation: impl Into<String>,
        target: u32,
    ) -> Self {
        Tasbih {
            id: id.into(),
            arabic: arabic.into(),
            transliteration: transliteration.into(),
            translation: translation.into(),
            target,
            count: 0,
        }
    }

    /// True once the count has reached the target.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.count >= self.target
    }

    /// Repetitions left until the target, never negative.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.count)
    }

    /// Fraction of the target reached, clamped to `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (f64::from(self.count) / f64::from(self.target)).min(1.0)
    }

    /// Advances the counter by one tap.
    ///
    /// ## Behavior
    /// ```text
    /// count < target - 1  ──► Incremented { count + 1 }
    /// count == target - 1 ──► Completed { target }      (UI vibrates)
    /// count >= target     ──► AlreadyComplete           (no change)
    /// ```
    pub fn increment(&mut self) -> CounterStep {
        if self.is_complete() {
            return CounterStep::AlreadyComplete;
        }

        self.count += 1;

        if self.is_complete() {
            CounterStep::Completed { count: self.count }
        } else {
            CounterStep::Incremented { count: self.count }
        }
    }

    /// Sets the count back to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

// =============================================================================
// Counter Step
// =============================================================================

/// Outcome of a single tap on the counter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum CounterStep {
    /// Count went up and the target is still ahead.
    Incremented { count: u32 },

    /// This tap reached the target.
    Completed { count: u32 },

    /// The counter was already complete; nothing changed.
    AlreadyComplete,
}

impl CounterStep {
    /// True when the step changed the count and therefore needs persisting.
    pub fn changed(&self) -> bool {
        !matches!(self, CounterStep::AlreadyComplete)
    }
}

// =============================================================================
// Tasbih Draft
// =============================================================================

/// Raw input from the creation modal.
///
/// `target` is kept as the text the user typed; it is parsed during
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasbihDraft {
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    pub target: String,
}

/// A draft that passed validation, with trimmed text and a numeric target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    pub arabic: String,
    pub transliteration: String,
    pub translation: String,
    pub target: u32,
}

impl TasbihDraft {
    /// Validates every field and returns the cleaned values.
    ///
    /// ## Rules
    /// - `arabic`, `transliteration`, `translation`: required after trimming,
    ///   at most `MAX_TEXT_LENGTH` characters
    /// - `target`: see [`parse_target`]
    pub fn validate(&self) -> CoreResult<ValidatedDraft> {
        let arabic = validate_text_field("arabic", &self.arabic)?;
        let transliteration = validate_text_field("transliteration", &self.transliteration)?;
        let translation = validate_text_field("translation", &self.translation)?;
        let target = parse_target(&self.target)?;

        Ok(ValidatedDraft {
            arabic,
            transliteration,
            translation,
            target,
        })
    }

    /// Validates the draft and builds a new counter with a fresh UUID v4 id
    /// and zero progress.
    pub fn into_tasbih(self) -> CoreResult<Tasbih> {
        let valid = self.validate()?;

        Ok(Tasbih::new(
            Uuid::new_v4().to_string(),
            valid.arabic,
            valid.transliteration,
            valid.translation,
            valid.target,
        ))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::DEFAULT_TARGET;

    fn subhanallah(target: u32) -> Tasbih {
        Tasbih::new("1", "سُبْحَانَ اللهِ", "SubhanAllah", "Glory be to Allah", target)
    }

    #[test]
    fn test_increment_until_complete() {
        let mut t = subhanallah(3);

        assert_eq!(t.increment(), CounterStep::Incremented { count: 1 });
        assert_eq!(t.increment(), CounterStep::Incremented { count: 2 });
        assert_eq!(t.increment(), CounterStep::Completed { count: 3 });
        assert!(t.is_complete());

        // Further taps do nothing
        assert_eq!(t.increment(), CounterStep::AlreadyComplete);
        assert_eq!(t.count, 3);
    }

    #[test]
    fn test_target_of_one_completes_immediately() {
        let mut t = subhanallah(1);
        assert_eq!(t.increment(), CounterStep::Completed { count: 1 });
    }

    #[test]
    fn test_reset() {
        let mut t = subhanallah(33);
        t.count = 20;
        t.reset();
        assert_eq!(t.count, 0);
        assert_eq!(t.target, 33);
    }

    #[test]
    fn test_progress_and_remaining() {
        let mut t = subhanallah(4);
        assert_eq!(t.progress(), 0.0);
        assert_eq!(t.remaining(), 4);

        t.count = 2;
        assert_eq!(t.progress(), 0.5);
        assert_eq!(t.remaining(), 2);

        // Count stored above target (written by an older client) is clamped
        t.count = 10;
        assert_eq!(t.progress(), 1.0);
        assert_eq!(t.remaining(), 0);

        let zero = subhanallah(0);
        assert_eq!(zero.progress(), 0.0);
    }

    #[test]
    fn test_counter_step_changed() {
        assert!(CounterStep::Incremented { count: 1 }.changed());
        assert!(CounterStep::Completed { count: 33 }.changed());
        assert!(!CounterStep::AlreadyComplete.changed());
    }

    #[test]
    fn test_json_field_names() {
        let t = subhanallah(33);
        let json = serde_json::to_value(&t).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["arabic"], "سُبْحَانَ اللهِ");
        assert_eq!(json["transliteration"], "SubhanAllah");
        assert_eq!(json["translation"], "Glory be to Allah");
        assert_eq!(json["target"], 33);
        assert_eq!(json["count"], 0);
    }

    #[test]
    fn test_negative_count_is_rejected_on_parse() {
        let json = r#"{"id":"1","arabic":"a","transliteration":"b","translation":"c","target":33,"count":-1}"#;
        assert!(serde_json::from_str::<Tasbih>(json).is_err());
    }

    #[test]
    fn test_draft_into_tasbih() {
        let draft = TasbihDraft {
            arabic: "  الْحَمْدُ لِلَّهِ ".to_string(),
            transliteration: "Alhamdulillah".to_string(),
            translation: "All praise is due to Allah".to_string(),
            target: " 33 ".to_string(),
        };

        let t = draft.into_tasbih().unwrap();
        assert_eq!(t.arabic, "الْحَمْدُ لِلَّهِ");
        assert_eq!(t.target, 33);
        assert_eq!(t.count, 0);
        assert!(Uuid::parse_str(&t.id).is_ok());
    }

    #[test]
    fn test_draft_blank_target_uses_default() {
        let draft = TasbihDraft {
            arabic: "اللهُ أَكْبَرُ".to_string(),
            transliteration: "Allahu Akbar".to_string(),
            translation: "Allah is the Greatest".to_string(),
            target: String::new(),
        };

        assert_eq!(draft.validate().unwrap().target, DEFAULT_TARGET);
    }

    #[test]
    fn test_draft_missing_field() {
        let draft = TasbihDraft {
            arabic: "   ".to_string(),
            transliteration: "x".to_string(),
            translation: "y".to_string(),
            target: "10".to_string(),
        };

        match draft.into_tasbih() {
            Err(CoreError::Validation(ValidationError::Required { field })) => {
                assert_eq!(field, "arabic")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_fresh_ids_differ() {
        let draft = TasbihDraft {
            arabic: "a".to_string(),
            transliteration: "b".to_string(),
            translation: "c".to_string(),
            target: "1".to_string(),
        };

        let first = draft.clone().into_tasbih().unwrap();
        let second = draft.into_tasbih().unwrap();
        assert_ne!(first.id, second.id);
    }
}
