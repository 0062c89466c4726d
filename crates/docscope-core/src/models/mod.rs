mod record;
mod search;
mod toc;

pub use record::{CodeSample, Guide, Record, RecordFields, RecordKind, Template, VocabularyTerm};
pub use search::SearchResult;
pub use toc::{Heading, TocEntry};
