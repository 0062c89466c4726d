use std::io::{self, Write};

use anyhow::Result;
use docscope_core::config::AppConfig;
use docscope_core::models::SearchResult;
use docscope_core::scoring::{MatchKind, calculate_match_score, classify_match};
use docscope_core::text::{NormalizedQuery, truncate_text};
use serde::Serialize;

pub(super) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(super) fn apply_excerpt(results: &mut [SearchResult], excerpt: Option<usize>) {
    let Some(max_chars) = excerpt else {
        return;
    };
    for result in results {
        result.content = truncate_text(&result.content, max_chars);
    }
}

#[derive(Debug, Serialize)]
pub(super) struct TokenizeReport {
    pub normalized: String,
    pub min_length: usize,
    pub tokens: Vec<String>,
}

pub(super) fn tokenize_report(
    config: &AppConfig,
    query: &str,
    min_length: Option<usize>,
) -> TokenizeReport {
    let min_length = min_length.unwrap_or(config.search.min_token_len);
    let normalized = NormalizedQuery::new(query, min_length);
    TokenizeReport {
        normalized: normalized.lower,
        min_length,
        tokens: normalized.tokens,
    }
}

#[derive(Debug, Serialize)]
pub(super) struct MatchReport {
    pub kind: MatchKind,
    pub score: f32,
}

pub(super) fn match_report(text: &str, query: &str) -> MatchReport {
    MatchReport {
        kind: classify_match(text, query),
        score: calculate_match_score(text, query),
    }
}
