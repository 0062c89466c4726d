// Public fallible APIs in this crate share one concrete error contract (`DocScopeError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod cache;
pub mod client;
pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod models;
pub mod ranking;
pub mod scoring;
pub mod text;
pub mod toc;

pub use client::DocScope;
pub use config::{AppConfig, MultiWordMode};
pub use error::{DocScopeError, ErrorPayload, Result};
pub use index::SearchIndex;
pub use models::{Record, RecordKind, SearchResult, TocEntry};
pub use ranking::{ResultRanker, merge_ranked, rank};
pub use scoring::{RelevanceScorer, ScoringWeights, calculate_match_score, score};
pub use text::tokenize;
pub use toc::build_toc;
