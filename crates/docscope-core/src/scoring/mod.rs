//! Relevance scoring shared by every content source.
//!
//! Scores are `f32` values in `[0, 1]`. Guides, code samples, templates and
//! vocabulary terms all pass through the same [`RelevanceScorer`], so their
//! scores can be merged into one ranked list.

mod matching;
mod relevance;
mod weights;

pub use matching::{
    MatchKind, ScoredField, calculate_match_score, calculate_match_score_with, classify_match,
    weighted_field_score,
};
pub use relevance::RelevanceScorer;
pub use weights::{FieldWeights, MatchWeights, MultiWordWeights, ScoringWeights};

use crate::models::Record;

/// Scores `record` against `query` with the standard weight table.
#[must_use]
pub fn score(record: &Record, query: &str) -> f32 {
    RelevanceScorer::default().score(record, query)
}
