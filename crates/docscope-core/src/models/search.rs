use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};

/// A record that matched a query, flattened for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub category: String,
    pub path: String,
    pub name: String,
    pub content: String,
    pub relevance_score: f32,
}

impl SearchResult {
    #[must_use]
    pub fn from_record(category: &str, record: &Record, relevance_score: f32) -> Self {
        let fields = record.fields();
        Self {
            kind: record.kind(),
            category: category.to_string(),
            path: fields.path.to_string(),
            name: fields.name.to_string(),
            content: fields.content.to_string(),
            relevance_score,
        }
    }
}
