use serde::{Deserialize, Serialize};

/// A markdown heading as it appeared in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The full line, `#` markers included.
    pub raw: String,
    pub level: usize,
}

impl Heading {
    #[must_use]
    pub fn new(raw: impl Into<String>, level: usize) -> Self {
        Self {
            raw: raw.into(),
            level,
        }
    }

    /// Heading text without the leading `#` run and surrounding whitespace.
    #[must_use]
    pub fn title(&self) -> &str {
        self.raw.trim_start_matches('#').trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub title: String,
    pub level: usize,
    pub file: Option<String>,
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    /// Number of entries in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}
