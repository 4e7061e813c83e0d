//! # Validation Module
//!
//! Input validation for the creation modal.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Mobile UI                                                    │
//! │  ├── Disable "Add" while fields are empty                              │
//! │  └── Numeric keyboard for target                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required text fields, length caps                                 │
//! │  └── Target parsing                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: TasbihStore                                                  │
//! │  └── Arabic text must be unique in the collection                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Tasbih;
use crate::{DEFAULT_TARGET, MAX_TARGET, MAX_TEXT_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Text Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_TEXT_LENGTH` characters (counted as chars, not bytes, since
///   Arabic with diacritics is multi-byte)
///
/// ## Example
/// ```rust
/// use tasbih_core::validation::validate_text_field;
///
/// assert_eq!(validate_text_field("arabic", " اللهُ ").unwrap(), "اللهُ");
/// assert!(validate_text_field("arabic", "").is_err());
/// ```
pub fn validate_text_field(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LENGTH,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Derives the numeric target from what the user typed.
///
/// ## Rules
/// ```text
/// ""        ──► DEFAULT_TARGET (33)
/// "abc"     ──► InvalidFormat
/// "0"       ──► MustBePositive
/// "1000000" ──► OutOfRange (max MAX_TARGET)
/// " 99 "    ──► 99
/// ```
///
/// ## Example
/// ```rust
/// use tasbih_core::validation::parse_target;
///
/// assert_eq!(parse_target("100").unwrap(), 100);
/// assert_eq!(parse_target("").unwrap(), 33);
/// assert!(parse_target("-5").is_err());
/// ```
pub fn parse_target(input: &str) -> ValidationResult<u32> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(DEFAULT_TARGET);
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "target".to_string(),
            reason: "must be a whole number".to_string(),
        });
    }

    // All digits, so the only parse failure left is overflow
    let target: u32 = input.parse().map_err(|_| ValidationError::OutOfRange {
        field: "target".to_string(),
        min: 1,
        max: MAX_TARGET,
    })?;

    if target == 0 {
        return Err(ValidationError::MustBePositive {
            field: "target".to_string(),
        });
    }

    if target > MAX_TARGET {
        return Err(ValidationError::OutOfRange {
            field: "target".to_string(),
            min: 1,
            max: MAX_TARGET,
        });
    }

    Ok(target)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Ensures no counter in `existing` already uses `arabic`.
///
/// Exact string comparison; no Unicode normalization or diacritic folding.
pub fn ensure_unique_arabic(existing: &[Tasbih], arabic: &str) -> CoreResult<()> {
    if existing.iter().any(|t| t.arabic == arabic) {
        return Err(CoreError::DuplicateArabic(arabic.to_string()));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
