use std::path::Path;

use tracing::info;

use crate::cache::MemoCache;
use crate::config::AppConfig;
use crate::corpus::{self, CorpusManifest};
use crate::error::{DocScopeError, Result};
use crate::index::SearchIndex;
use crate::models::{SearchResult, TocEntry};
use crate::ranking::{ResultRanker, merge_ranked};
use crate::scoring::{RelevanceScorer, ScoringWeights};
use crate::toc::{self, TitleFileMap};

/// Query tools over one loaded documentation corpus.
///
/// The document index is built eagerly on open. Vocabulary (per locale) and
/// table-of-contents trees (per `include_all` mode) are built on first use
/// and memoized until [`DocScope::clear_caches`].
#[derive(Debug)]
pub struct DocScope {
    config: AppConfig,
    ranker: ResultRanker,
    manifest: CorpusManifest,
    index: SearchIndex,
    vocabulary: MemoCache<String, SearchIndex>,
    tocs: MemoCache<bool, Vec<TocEntry>>,
}

impl DocScope {
    pub fn open(manifest_path: &Path) -> Result<Self> {
        Self::open_with_config(manifest_path, AppConfig::from_env()?)
    }

    pub fn open_with_config(manifest_path: &Path, config: AppConfig) -> Result<Self> {
        let manifest = CorpusManifest::load(manifest_path)?;
        let index = corpus::load_index(&manifest)?;
        info!(
            manifest = %manifest_path.display(),
            categories = index.category_names().len(),
            records = index.len(),
            "opened corpus"
        );
        Self::assemble(config, manifest, index)
    }

    /// Wraps an index built by the caller. No vocabulary or TOC sources are
    /// attached.
    pub fn from_index(index: SearchIndex, config: AppConfig) -> Result<Self> {
        Self::assemble(config, CorpusManifest::default(), index)
    }

    fn assemble(config: AppConfig, manifest: CorpusManifest, index: SearchIndex) -> Result<Self> {
        let scorer = RelevanceScorer::new(
            ScoringWeights::STANDARD,
            config.search.min_token_len,
            config.search.multi_word_mode,
        )?;
        Ok(Self {
            config,
            ranker: ResultRanker::new(scorer),
            manifest,
            index,
            vocabulary: MemoCache::new(),
            tocs: MemoCache::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub const fn index(&self) -> &SearchIndex {
        &self.index
    }

    #[must_use]
    pub const fn manifest(&self) -> &CorpusManifest {
        &self.manifest
    }

    #[must_use]
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let limit = limit.unwrap_or(self.config.search.max_results);
        self.ranker.rank(query, &self.index, limit)
    }

    pub fn search_category(
        &self,
        query: &str,
        category: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        if self.index.category(category).is_none() {
            return Err(DocScopeError::NotFound(format!("category '{category}'")));
        }
        let limit = limit.unwrap_or(self.config.search.max_results);
        Ok(self
            .ranker
            .rank_category(query, &self.index, category, limit))
    }

    #[must_use]
    pub fn lookup(&self, name: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let limit = limit.unwrap_or(self.config.search.lookup_max_results);
        self.ranker.lookup(name, &self.index, limit)
    }

    pub fn vocabulary(&mut self, locale: &str) -> Result<&SearchIndex> {
        let manifest = &self.manifest;
        self.vocabulary
            .get_or_try_insert_with(locale.to_string(), || {
                corpus::load_vocabulary(manifest, locale)
            })
    }

    pub fn locales(&self) -> Result<Vec<String>> {
        corpus::available_locales(&self.manifest)
    }

    pub fn search_vocabulary(
        &mut self,
        locale: &str,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        let limit = limit.unwrap_or(self.config.search.max_results);
        let ranker = self.ranker;
        let vocabulary = self.vocabulary(locale)?;
        Ok(ranker.rank(query, vocabulary, limit))
    }

    /// Searches documents and, when `locale` is given, that locale's
    /// vocabulary, then merges both into one list. Documents come first on
    /// equal scores.
    pub fn search_all(
        &mut self,
        query: &str,
        locale: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        let limit = limit.unwrap_or(self.config.search.max_results);
        let documents = self.ranker.rank(query, &self.index, limit);
        let Some(locale) = locale else {
            return Ok(documents);
        };
        let terms = self.search_vocabulary(locale, query, Some(limit))?;
        Ok(merge_ranked([documents, terms], limit))
    }

    /// Table of contents from the manifest's `[toc]` section.
    /// `include_all` defaults to the configured value.
    pub fn toc(&mut self, include_all: Option<bool>) -> Result<&[TocEntry]> {
        let include_all = include_all.unwrap_or(self.config.toc.include_all);
        let manifest = &self.manifest;
        let entries = self
            .tocs
            .get_or_try_insert_with(include_all, || build_manifest_toc(manifest, include_all))?;
        Ok(entries.as_slice())
    }

    pub fn clear_caches(&mut self) {
        self.vocabulary.clear();
        self.tocs.clear();
    }
}

fn build_manifest_toc(manifest: &CorpusManifest, include_all: bool) -> Result<Vec<TocEntry>> {
    let toc_spec = manifest
        .toc
        .as_ref()
        .ok_or_else(|| DocScopeError::NotFound("manifest has no [toc] section".to_string()))?;
    let document_path = manifest.resolve(&toc_spec.document);
    let document = std::fs::read_to_string(&document_path).map_err(|err| {
        DocScopeError::NotFound(format!("toc document {}: {err}", document_path.display()))
    })?;
    let pages = toc::read_page_first_lines(&manifest.resolve(&toc_spec.pages))?;
    let mapping: TitleFileMap = toc::title_file_mapping(pages);
    let entries = toc::build_toc_from_document(&document, &mapping, include_all);
    info!(
        include_all,
        roots = entries.len(),
        mapped_pages = mapping.len(),
        "built table of contents"
    );
    Ok(entries)
}
