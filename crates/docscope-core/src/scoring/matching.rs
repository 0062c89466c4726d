use serde::Serialize;

use super::weights::{FieldWeights, MatchWeights, ScoringWeights};

/// How a query relates to a piece of text, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    CaseInsensitiveExact,
    Prefix,
    Contains,
    None,
}

impl MatchKind {
    #[must_use]
    pub const fn weight(self, weights: &MatchWeights) -> f32 {
        match self {
            Self::Exact => weights.exact,
            Self::CaseInsensitiveExact => weights.case_insensitive_exact,
            Self::Prefix => weights.prefix,
            Self::Contains => weights.contains,
            Self::None => 0.0,
        }
    }
}

#[must_use]
pub fn classify_match(text: &str, query: &str) -> MatchKind {
    if query.is_empty() || text.is_empty() {
        return MatchKind::None;
    }
    if text == query {
        return MatchKind::Exact;
    }
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    if text_lower == query_lower {
        MatchKind::CaseInsensitiveExact
    } else if text_lower.starts_with(&query_lower) {
        MatchKind::Prefix
    } else if text_lower.contains(&query_lower) {
        MatchKind::Contains
    } else {
        MatchKind::None
    }
}

/// Tiered name match: exact, case-insensitive exact, substring, nothing.
#[must_use]
pub fn calculate_match_score(text: &str, query: &str) -> f32 {
    calculate_match_score_with(&ScoringWeights::STANDARD.matches, text, query)
}

#[must_use]
pub fn calculate_match_score_with(weights: &MatchWeights, text: &str, query: &str) -> f32 {
    match classify_match(text, query) {
        MatchKind::Exact => weights.exact,
        MatchKind::CaseInsensitiveExact => weights.case_insensitive_exact,
        MatchKind::Prefix | MatchKind::Contains => weights.contains_match,
        MatchKind::None => 0.0,
    }
}

/// Record field that a weighted lookup compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoredField {
    Title,
    Name,
    Owner,
    Category,
    Description,
    Content,
    Path,
    FileName,
}

impl ScoredField {
    #[must_use]
    pub const fn weight(self, weights: &FieldWeights) -> f32 {
        match self {
            Self::Title => weights.title,
            Self::Name => weights.name,
            Self::Owner => weights.owner,
            Self::Category => weights.category,
            Self::Description | Self::Content => weights.content,
            Self::Path => weights.path,
            Self::FileName => weights.file_name,
        }
    }
}

/// Sum of `match weight * field weight` over the given fields, plus the full
/// match bonus when any field equals the query ignoring case. Clamped to 1.
#[must_use]
pub fn weighted_field_score(
    weights: &ScoringWeights,
    fields: &[(ScoredField, &str)],
    query: &str,
) -> f32 {
    let query = query.trim();
    if query.is_empty() {
        return 0.0;
    }

    let mut score = 0.0f32;
    let mut full_match = false;
    for (field, text) in fields {
        let kind = classify_match(text, query);
        if matches!(kind, MatchKind::Exact | MatchKind::CaseInsensitiveExact) {
            full_match = true;
        }
        score += kind.weight(&weights.matches) * field.weight(&weights.fields);
    }
    if full_match {
        score += weights.fields.full_match_bonus;
    }
    score.min(1.0)
}
