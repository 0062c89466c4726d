//! In-memory index: category name to ordered records.
//!
//! Categories keep insertion order. Ranking ties are broken by that order,
//! so it must not depend on hashing.

use crate::error::{DocScopeError, Result};
use crate::models::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexCategory {
    name: String,
    records: Vec<Record>,
}

impl IndexCategory {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    categories: Vec<IndexCategory>,
}

impl SearchIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to `category`, creating the category at the end of the
    /// iteration order if it does not exist yet.
    ///
    /// Records with no text in any field are a caller bug and are rejected.
    pub fn insert(&mut self, category: &str, record: Record) -> Result<()> {
        if record.fields().is_blank() {
            return Err(blank_record_error(category, &record));
        }
        self.category_mut(category).records.push(record);
        Ok(())
    }

    /// Appends a batch of records. The batch is all-or-nothing: if any record
    /// is blank the index is left untouched.
    pub fn extend(
        &mut self,
        category: &str,
        records: impl IntoIterator<Item = Record>,
    ) -> Result<usize> {
        let records = records.into_iter().collect::<Vec<_>>();
        if let Some(blank) = records.iter().find(|record| record.fields().is_blank()) {
            return Err(blank_record_error(category, blank));
        }
        let added = records.len();
        self.category_mut(category).records.extend(records);
        Ok(added)
    }

    fn category_mut(&mut self, category: &str) -> &mut IndexCategory {
        let position = match self.categories.iter().position(|c| c.name == category) {
            Some(position) => position,
            None => {
                self.categories.push(IndexCategory {
                    name: category.to_string(),
                    records: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        &mut self.categories[position]
    }

    pub fn categories(&self) -> impl Iterator<Item = &IndexCategory> {
        self.categories.iter()
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&IndexCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Total record count across categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.records.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn blank_record_error(category: &str, record: &Record) -> DocScopeError {
    DocScopeError::Validation(format!(
        "{} record in category '{category}' has no text fields",
        record.kind().as_str()
    ))
}
