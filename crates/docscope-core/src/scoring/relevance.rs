use crate::config::{DEFAULT_MIN_TOKEN_LEN, MultiWordMode};
use crate::error::Result;
use crate::models::{Record, RecordFields};
use crate::text::{NormalizedQuery, contains_lowered};

use super::weights::{MultiWordWeights, ScoringWeights};

/// Per-stage contributions derived from the weight table.
///
/// The full-query stage checks content, then name, then path and stops at the
/// first hit. The token stage checks content, name, path, then category for
/// each token and adds the first hit only.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StageWeights {
    full_content: f32,
    full_name: f32,
    full_path: f32,
    token_content: f32,
    token_name: f32,
    token_path: f32,
    token_category: f32,
}

impl StageWeights {
    const fn from_table(weights: &ScoringWeights) -> Self {
        let fields = &weights.fields;
        Self {
            full_content: fields.content + fields.full_match_bonus,
            full_name: fields.title,
            full_path: fields.owner,
            token_content: fields.owner,
            token_name: fields.content,
            token_path: weights.multi_word.partial_word,
            token_category: weights.multi_word.partial_word,
        }
    }
}

/// Compositional scorer applied identically to every content source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceScorer {
    weights: ScoringWeights,
    stages: StageWeights,
    min_token_len: usize,
    multi_word_mode: MultiWordMode,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::from_valid(
            ScoringWeights::STANDARD,
            DEFAULT_MIN_TOKEN_LEN,
            MultiWordMode::Additive,
        )
    }
}

impl RelevanceScorer {
    pub fn new(
        weights: ScoringWeights,
        min_token_len: usize,
        multi_word_mode: MultiWordMode,
    ) -> Result<Self> {
        weights.validate()?;
        Ok(Self::from_valid(weights, min_token_len, multi_word_mode))
    }

    const fn from_valid(
        weights: ScoringWeights,
        min_token_len: usize,
        multi_word_mode: MultiWordMode,
    ) -> Self {
        Self {
            stages: StageWeights::from_table(&weights),
            weights,
            min_token_len,
            multi_word_mode,
        }
    }

    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    #[must_use]
    pub const fn min_token_len(&self) -> usize {
        self.min_token_len
    }

    #[must_use]
    pub fn normalize(&self, query: &str) -> NormalizedQuery {
        NormalizedQuery::new(query, self.min_token_len)
    }

    #[must_use]
    pub fn score(&self, record: &Record, query: &str) -> f32 {
        self.score_fields(record.fields(), &self.normalize(query))
    }

    /// Score in `[0, 1]`; zero whenever the normalized query is empty.
    #[must_use]
    pub fn score_fields(&self, fields: RecordFields<'_>, query: &NormalizedQuery) -> f32 {
        if query.is_empty() {
            return 0.0;
        }

        let content = fields.content.to_lowercase();
        let name = fields.name.to_lowercase();
        let path = fields.path.to_lowercase();
        let category = fields.category.to_lowercase();
        let s = &self.stages;

        let mut score = if contains_lowered(&content, &query.lower) {
            s.full_content
        } else if contains_lowered(&name, &query.lower) {
            s.full_name
        } else if contains_lowered(&path, &query.lower) {
            s.full_path
        } else {
            0.0
        };

        let mut word_matches = 0usize;
        for token in &query.tokens {
            let contribution = if contains_lowered(&content, token) {
                s.token_content
            } else if contains_lowered(&name, token) {
                s.token_name
            } else if contains_lowered(&path, token) {
                s.token_path
            } else if contains_lowered(&category, token) {
                s.token_category
            } else {
                continue;
            };
            score += contribution;
            word_matches += 1;
        }

        let token_count = query.tokens.len();
        if token_count > 1 && word_matches > 1 {
            score += multi_word_bonus(
                &self.weights.multi_word,
                self.multi_word_mode,
                word_matches,
                token_count,
            );
        }

        score.min(1.0)
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "token counts are tiny and the ratio is a ranking weight"
)]
fn multi_word_bonus(
    weights: &MultiWordWeights,
    mode: MultiWordMode,
    word_matches: usize,
    token_count: usize,
) -> f32 {
    let ratio = word_matches as f32 / token_count as f32;
    match mode {
        MultiWordMode::Additive => weights.bonus * ratio,
        MultiWordMode::Coarse => {
            if ratio >= weights.high_threshold {
                weights.high_base
            } else if ratio >= weights.medium_threshold {
                weights.medium_base
            } else {
                weights.bonus * ratio
            }
        }
    }
}
