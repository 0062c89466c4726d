//! Filesystem adapters that turn a documentation tree into typed records.

mod loader;
mod manifest;

pub use loader::{available_locales, load_index, load_source, load_vocabulary};
pub use manifest::{CorpusManifest, DEFAULT_MANIFEST_FILE, SourceKind, SourceSpec, TocSpec};
