//! Query normalization shared by every scorer.
//!
//! All helpers are pure: the same input always yields the same output, and
//! none of them allocate more than the returned value.

use crate::config::DEFAULT_MIN_TOKEN_LEN;

/// A query prepared once and reused across every record it is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Lowercased, trimmed full query.
    pub lower: String,
    /// Lowercased whitespace tokens with short words removed, in query order.
    pub tokens: Vec<String>,
}

impl NormalizedQuery {
    #[must_use]
    pub fn new(query: &str, min_token_len: usize) -> Self {
        Self {
            lower: query.trim().to_lowercase(),
            tokens: tokenize(query, min_token_len),
        }
    }

    /// An empty query scores zero against every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }
}

/// Splits on whitespace, lowercases, and drops tokens shorter than
/// `min_length` characters.
#[must_use]
pub fn tokenize(query: &str, min_length: usize) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= min_length)
        .collect()
}

#[must_use]
pub fn tokenize_default(query: &str) -> Vec<String> {
    tokenize(query, DEFAULT_MIN_TOKEN_LEN)
}

/// Lowercases and strips `-` and `_`, so `Show-Stems` and `show_stems`
/// compare equal.
#[must_use]
pub fn normalize_for_matching(text: &str) -> String {
    text.chars()
        .filter(|ch| *ch != '-' && *ch != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive substring test. An empty query never matches.
#[must_use]
pub fn case_insensitive_contains(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Substring test for inputs that are already lowercased. An empty needle
/// never matches.
#[must_use]
pub(crate) fn contains_lowered(haystack_lower: &str, needle_lower: &str) -> bool {
    !needle_lower.is_empty() && haystack_lower.contains(needle_lower)
}

#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let Some((clip_idx, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let mut out = text[..clip_idx].to_string();
    out.push_str("...");
    out
}
