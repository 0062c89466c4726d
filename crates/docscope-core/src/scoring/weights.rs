//! Immutable weight tables shared by every scorer.
//!
//! Weights are plain data. A scorer receives a [`ScoringWeights`] value at
//! construction instead of reading module globals, so tests and callers can
//! inject alternative tables after [`ScoringWeights::validate`] accepts them.

use crate::error::{DocScopeError, Result};

/// Weight by how a query matched a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub exact: f32,
    pub case_insensitive_exact: f32,
    pub prefix: f32,
    pub contains: f32,
    /// Flat substring score used by the tiered name matcher.
    pub contains_match: f32,
}

/// Weight by which record field matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub title: f32,
    pub name: f32,
    /// Owner or author.
    pub owner: f32,
    pub category: f32,
    /// Description and body content share one weight.
    pub content: f32,
    pub path: f32,
    pub file_name: f32,
    pub full_match_bonus: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiWordWeights {
    pub bonus: f32,
    pub partial_word: f32,
    pub high_threshold: f32,
    pub medium_threshold: f32,
    pub high_base: f32,
    pub medium_base: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub matches: MatchWeights,
    pub fields: FieldWeights,
    pub multi_word: MultiWordWeights,
}

impl ScoringWeights {
    pub const STANDARD: Self = Self {
        matches: MatchWeights {
            exact: 1.0,
            case_insensitive_exact: 0.95,
            prefix: 0.95,
            contains: 0.85,
            contains_match: 0.6,
        },
        fields: FieldWeights {
            title: 0.6,
            name: 0.5,
            owner: 0.4,
            category: 0.35,
            content: 0.3,
            path: 0.3,
            file_name: 0.4,
            full_match_bonus: 0.5,
        },
        multi_word: MultiWordWeights {
            bonus: 0.3,
            partial_word: 0.1,
            high_threshold: 0.8,
            medium_threshold: 0.6,
            high_base: 0.75,
            medium_base: 0.65,
        },
    };

    /// Every weight with a stable name, in table order.
    #[must_use]
    pub fn named(&self) -> [(&'static str, f32); 19] {
        let m = &self.matches;
        let f = &self.fields;
        let w = &self.multi_word;
        [
            ("exact", m.exact),
            ("case_insensitive_exact", m.case_insensitive_exact),
            ("prefix", m.prefix),
            ("contains", m.contains),
            ("contains_match", m.contains_match),
            ("title", f.title),
            ("name", f.name),
            ("owner", f.owner),
            ("category", f.category),
            ("content", f.content),
            ("path", f.path),
            ("file_name", f.file_name),
            ("full_match_bonus", f.full_match_bonus),
            ("multi_word_bonus", w.bonus),
            ("partial_word", w.partial_word),
            ("high_threshold", w.high_threshold),
            ("medium_threshold", w.medium_threshold),
            ("high_base", w.high_base),
            ("medium_base", w.medium_base),
        ]
    }

    /// Rejects tables that break the range or ordering invariants.
    ///
    /// Every weight must be finite and within `[0, 1]`. Match weights must
    /// descend `exact >= prefix, case_insensitive_exact > contains >
    /// contains_match`, and the coarse multi-word thresholds and bases must
    /// descend from high to medium.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.named() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(DocScopeError::Validation(format!(
                    "weight {name} must be within [0, 1], got {value}"
                )));
            }
        }

        let m = &self.matches;
        let ordered = m.exact >= m.prefix
            && m.exact >= m.case_insensitive_exact
            && m.prefix > m.contains
            && m.case_insensitive_exact > m.contains
            && m.contains > m.contains_match;
        if !ordered {
            return Err(DocScopeError::Validation(
                "match weights must descend exact >= prefix/case_insensitive_exact > contains > contains_match"
                    .to_string(),
            ));
        }

        let w = &self.multi_word;
        if w.high_threshold <= w.medium_threshold || w.high_base <= w.medium_base {
            return Err(DocScopeError::Validation(
                "multi-word high tier must exceed medium tier".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}
