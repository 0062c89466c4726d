use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DocScopeError, Result};
use crate::models::RecordKind;

pub const DEFAULT_MANIFEST_FILE: &str = "docscope.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Guide,
    Implementation,
    Example,
    Template,
    Vocabulary,
}

impl SourceKind {
    #[must_use]
    pub const fn record_kind(self) -> RecordKind {
        match self {
            Self::Guide => RecordKind::Guide,
            Self::Implementation => RecordKind::Implementation,
            Self::Example => RecordKind::Example,
            Self::Template => RecordKind::Template,
            Self::Vocabulary => RecordKind::VocabularyTerm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSpec {
    pub category: String,
    pub kind: SourceKind,
    pub root: PathBuf,
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub include_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TocSpec {
    pub document: PathBuf,
    pub pages: PathBuf,
}

/// Declares which directories feed which index categories.
///
/// Relative paths resolve against `base_dir`, the directory holding the
/// manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusManifest {
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceSpec>,
    #[serde(default)]
    pub toc: Option<TocSpec>,
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for CorpusManifest {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            toc: None,
            base_dir: PathBuf::from("."),
        }
    }
}

impl CorpusManifest {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DocScopeError::NotFound(format!(
                "manifest {}",
                path.display()
            )));
        }
        let raw = fs::read_to_string(path)?;
        let base_dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self::parse(&raw, base_dir)
    }

    pub fn parse(raw: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut manifest: Self = toml::from_str(raw)?;
        manifest.base_dir = base_dir.into();
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        for (position, source) in self.sources.iter().enumerate() {
            if source.category.trim().is_empty() {
                return Err(DocScopeError::InvalidManifest(format!(
                    "source #{position} has an empty category"
                )));
            }
            if source.root.as_os_str().is_empty() {
                return Err(DocScopeError::InvalidManifest(format!(
                    "source '{}' has an empty root",
                    source.category
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.base_dir.join(relative)
    }

    pub fn document_sources(&self) -> impl Iterator<Item = &SourceSpec> {
        self.sources
            .iter()
            .filter(|source| source.kind != SourceKind::Vocabulary)
    }

    pub fn vocabulary_sources(&self) -> impl Iterator<Item = &SourceSpec> {
        self.sources
            .iter()
            .filter(|source| source.kind == SourceKind::Vocabulary)
    }
}
