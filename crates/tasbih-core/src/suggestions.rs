//! # Suggestions
//!
//! Built-in catalog of common adhkar offered by the creation modal.
//!
//! The modal lists these above the free-text form. Tapping one fills the
//! draft; suggestions whose Arabic text is already in the collection are
//! hidden since the store would reject them anyway.

use serde::Serialize;

use crate::types::{Tasbih, TasbihDraft};
use crate::validation::ensure_unique_arabic;

/// A predefined dhikr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    /// Conventional repetition count.
    pub target: u32,
}

impl Suggestion {
    /// Fills a creation form with this suggestion.
    pub fn to_draft(&self) -> TasbihDraft {
        TasbihDraft {
            arabic: self.arabic.to_string(),
            transliteration: self.transliteration.to_string(),
            translation: self.translation.to_string(),
            target: self.target.to_string(),
        }
    }

    /// Builds a counter directly, with a fresh id and zero progress.
    pub fn to_tasbih(&self) -> Tasbih {
        Tasbih::new(
            uuid::Uuid::new_v4().to_string(),
            self.arabic,
            self.transliteration,
            self.translation,
            self.target,
        )
    }
}

const CATALOG: &[Suggestion] = &[
    Suggestion {
        arabic: "سُبْحَانَ اللهِ",
        transliteration: "SubhanAllah",
        translation: "Glory be to Allah",
        target: 33,
    },
    Suggestion {
        arabic: "الْحَمْدُ لِلَّهِ",
        transliteration: "Alhamdulillah",
        translation: "All praise is due to Allah",
        target: 33,
    },
    Suggestion {
        arabic: "اللهُ أَكْبَرُ",
        transliteration: "Allahu Akbar",
        translation: "Allah is the Greatest",
        target: 34,
    },
    Suggestion {
        arabic: "لَا إِلَٰهَ إِلَّا اللهُ",
        transliteration: "La ilaha illa Allah",
        translation: "There is no god but Allah",
        target: 100,
    },
    Suggestion {
        arabic: "أَسْتَغْفِرُ اللهَ",
        transliteration: "Astaghfirullah",
        translation: "I seek forgiveness from Allah",
        target: 100,
    },
    Suggestion {
        arabic: "سُبْحَانَ اللهِ وَبِحَمْدِهِ",
        transliteration: "SubhanAllahi wa bihamdihi",
        translation: "Glory be to Allah and praise Him",
        target: 100,
    },
    Suggestion {
        arabic: "لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللهِ",
        transliteration: "La hawla wa la quwwata illa billah",
        translation: "There is no power nor strength except with Allah",
        target: 100,
    },
    Suggestion {
        arabic: "اللَّهُمَّ صَلِّ عَلَى مُحَمَّدٍ",
        transliteration: "Allahumma salli ala Muhammad",
        translation: "O Allah, send blessings upon Muhammad",
        target: 100,
    },
];

/// Every built-in suggestion, in display order.
pub fn all() -> &'static [Suggestion] {
    CATALOG
}

/// Suggestions that can still be added to `existing`.
pub fn available(existing: &[Tasbih]) -> Vec<Suggestion> {
    CATALOG
        .iter()
        .filter(|s| ensure_unique_arabic(existing, s.arabic).is_ok())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_unique_and_valid() {
        let arabic: HashSet<_> = all().iter().map(|s| s.arabic).collect();
        assert_eq!(arabic.len(), all().len());

        for s in all() {
            let t = s.to_draft().into_tasbih().unwrap();
            assert_eq!(t.arabic, s.arabic);
            assert_eq!(t.target, s.target);
        }
    }

    #[test]
    fn test_available_hides_existing() {
        let existing = vec![all()[0].to_tasbih(), all()[2].to_tasbih()];

        let remaining = available(&existing);
        assert_eq!(remaining.len(), all().len() - 2);
        assert!(!remaining.contains(&all()[0]));
        assert!(!remaining.contains(&all()[2]));
        assert!(remaining.contains(&all()[1]));
    }

    #[test]
    fn test_available_with_empty_collection() {
        assert_eq!(available(&[]), all().to_vec());
    }

    #[test]
    fn test_to_tasbih_starts_at_zero() {
        let t = all()[3].to_tasbih();
        assert_eq!(t.count, 0);
        assert_eq!(t.target, 100);
        assert!(!t.id.is_empty());
    }
}
