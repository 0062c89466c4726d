use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::{DocScopeError, Result};
use crate::index::SearchIndex;
use crate::models::{CodeSample, Guide, Record, Template, VocabularyTerm};

use super::manifest::{CorpusManifest, SourceKind, SourceSpec};

/// Loads every non-vocabulary source into one index, categories in manifest
/// order.
pub fn load_index(manifest: &CorpusManifest) -> Result<SearchIndex> {
    let mut index = SearchIndex::new();
    for source in manifest.document_sources() {
        let records = load_source(manifest, source)?;
        let added = index.extend(&source.category, records)?;
        info!(
            category = %source.category,
            kind = source.kind.record_kind().as_str(),
            records = added,
            "loaded corpus source"
        );
    }
    Ok(index)
}

pub fn load_source(manifest: &CorpusManifest, source: &SourceSpec) -> Result<Vec<Record>> {
    let root = manifest.resolve(&source.root);
    if !root.is_dir() {
        return Err(DocScopeError::NotFound(format!(
            "source '{}' root {}",
            source.category,
            root.display()
        )));
    }
    let filter = SourcePathFilter::new(source)?;

    let entries = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.path() == root.as_path() {
                return true;
            }
            let Ok(relative) = entry.path().strip_prefix(&root) else {
                return true;
            };
            if entry.file_type().is_dir() {
                filter.allows_directory(relative)
            } else {
                true
            }
        });

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(&root)
            .map_err(|e| DocScopeError::Internal(e.to_string()))?;
        if !filter.allows_file(relative) {
            continue;
        }
        let content = match fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(err) => {
                warn!(file = %entry.path().display(), error = %err, "skipping unreadable file");
                continue;
            }
        };
        let display_path = relative_to_unix_path(&source.root.join(relative));
        if let Some(record) = build_record(source.kind, relative, display_path, content) {
            records.push(record);
        }
    }
    Ok(records)
}

fn build_record(
    kind: SourceKind,
    relative: &Path,
    path: String,
    content: String,
) -> Option<Record> {
    let stem = relative
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let record = match kind {
        SourceKind::Guide => {
            let title = first_heading_text(&content).unwrap_or(stem);
            let section = relative
                .parent()
                .map(relative_to_unix_path)
                .filter(|section| !section.is_empty());
            Record::Guide(Guide {
                title,
                path,
                content,
                section,
            })
        }
        SourceKind::Implementation | SourceKind::Example => {
            let sample = CodeSample {
                name: stem,
                path,
                description: first_description_line(&content),
                language: relative
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_ascii_lowercase()),
                content,
            };
            if kind == SourceKind::Implementation {
                Record::Implementation(sample)
            } else {
                Record::Example(sample)
            }
        }
        SourceKind::Template => Record::Template(Template {
            name: stem,
            path,
            description: first_description_line(&content),
            content,
        }),
        SourceKind::Vocabulary => return None,
    };
    (!record.fields().is_blank()).then_some(record)
}

fn first_heading_text(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim_start)
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .filter(|title| !title.is_empty())
}

/// First non-empty line with comment markers stripped.
fn first_description_line(content: &str) -> Option<String> {
    content
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches("///")
                .trim_start_matches("//")
                .trim_start_matches("/*")
                .trim_start_matches("--")
                .trim_start_matches(['#', '*'])
                .trim_end_matches("*/")
                .trim()
        })
        .find(|line| !line.is_empty())
        .map(ToString::to_string)
}

/// Loads all terms for `locale` from every vocabulary source into one index,
/// one category per source.
pub fn load_vocabulary(manifest: &CorpusManifest, locale: &str) -> Result<SearchIndex> {
    validate_locale(locale)?;
    let mut index = SearchIndex::new();
    let mut found = false;
    for source in manifest.vocabulary_sources() {
        let path = manifest
            .resolve(&source.root)
            .join(format!("{locale}.json"));
        if !path.is_file() {
            continue;
        }
        found = true;
        let raw = fs::read_to_string(&path)?;
        let terms: BTreeMap<String, String> = serde_json::from_str(&raw)?;
        let records = terms
            .into_iter()
            .filter(|(key, term)| !key.trim().is_empty() || !term.trim().is_empty())
            .map(|(key, term)| {
                Record::VocabularyTerm(VocabularyTerm {
                    key,
                    term,
                    locale: locale.to_string(),
                })
            });
        let added = index.extend(&source.category, records)?;
        info!(locale, category = %source.category, terms = added, "loaded vocabulary");
    }
    if !found {
        return Err(DocScopeError::NotFound(format!("vocabulary for locale '{locale}'")));
    }
    Ok(index)
}

/// Locale codes present in any vocabulary source, sorted and deduplicated.
pub fn available_locales(manifest: &CorpusManifest) -> Result<Vec<String>> {
    let mut locales = Vec::new();
    for source in manifest.vocabulary_sources() {
        let root = manifest.resolve(&source.root);
        if !root.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("json")
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                locales.push(stem.to_string());
            }
        }
    }
    locales.sort();
    locales.dedup();
    Ok(locales)
}

fn validate_locale(locale: &str) -> Result<()> {
    let valid = !locale.is_empty()
        && locale
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(DocScopeError::Validation(format!(
            "invalid locale code '{locale}'"
        )))
    }
}

#[derive(Debug)]
struct SourcePathFilter {
    include_hidden: bool,
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl SourcePathFilter {
    fn new(source: &SourceSpec) -> Result<Self> {
        let include = if source.include.is_empty() {
            None
        } else {
            Some(build_glob_set(&source.category, &source.include)?)
        };
        Ok(Self {
            include_hidden: source.include_hidden,
            include,
            exclude: build_glob_set(&source.category, &source.exclude)?,
        })
    }

    fn allows_directory(&self, relative: &Path) -> bool {
        if relative.as_os_str().is_empty() {
            return true;
        }
        if !self.include_hidden && path_has_hidden_component(relative) {
            return false;
        }
        !self.exclude.is_match(relative_to_unix_path(relative))
    }

    fn allows_file(&self, relative: &Path) -> bool {
        if !self.include_hidden && path_has_hidden_component(relative) {
            return false;
        }
        let unix = relative_to_unix_path(relative);
        if self.exclude.is_match(&unix) {
            return false;
        }
        self.include
            .as_ref()
            .is_none_or(|include| include.is_match(&unix))
    }
}

fn build_glob_set(category: &str, patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            continue;
        }
        let glob = Glob::new(trimmed).map_err(|err| {
            DocScopeError::InvalidManifest(format!(
                "invalid glob '{trimmed}' in source '{category}': {err}"
            ))
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|err| {
        DocScopeError::InvalidManifest(format!("invalid globs in source '{category}': {err}"))
    })
}

fn path_has_hidden_component(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(value) => value.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

fn relative_to_unix_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(value) => Some(value.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
