//! Ranking and merging of scored results.
//!
//! Ordering rule, applied everywhere: score descending, ties keep enumeration
//! order (category order, then record order). `sort_by` is stable, which is
//! what makes the tie-break hold.

use tracing::debug;

use crate::index::{IndexCategory, SearchIndex};
use crate::models::{Record, SearchResult};
use crate::scoring::{RelevanceScorer, ScoredField, weighted_field_score};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResultRanker {
    scorer: RelevanceScorer,
}

impl ResultRanker {
    #[must_use]
    pub const fn new(scorer: RelevanceScorer) -> Self {
        Self { scorer }
    }

    #[must_use]
    pub const fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Scores every record in every category, keeps positive scores, and
    /// returns at most `max_results` of them.
    #[must_use]
    pub fn rank(&self, query: &str, index: &SearchIndex, max_results: usize) -> Vec<SearchResult> {
        self.rank_categories(query, index.categories(), max_results)
    }

    #[must_use]
    pub fn rank_category(
        &self,
        query: &str,
        index: &SearchIndex,
        category: &str,
        max_results: usize,
    ) -> Vec<SearchResult> {
        self.rank_categories(query, index.category(category), max_results)
    }

    fn rank_categories<'a>(
        &self,
        query: &str,
        categories: impl IntoIterator<Item = &'a IndexCategory>,
        max_results: usize,
    ) -> Vec<SearchResult> {
        let normalized = self.scorer.normalize(query);
        if normalized.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let mut examined = 0usize;
        let mut results = Vec::new();
        for category in categories {
            for record in category.records() {
                examined += 1;
                let score = self.scorer.score_fields(record.fields(), &normalized);
                if score > 0.0 {
                    results.push(SearchResult::from_record(category.name(), record, score));
                }
            }
        }
        let matched = results.len();
        sort_by_score_desc_stable(&mut results);
        results.truncate(max_results);
        debug!(
            query = %normalized.lower,
            examined,
            matched,
            returned = results.len(),
            "ranked query"
        );
        results
    }

    /// Name lookup for plugin/class style queries. Uses the weighted field
    /// matcher over name, file stem and category instead of the
    /// compositional scorer.
    #[must_use]
    pub fn lookup(&self, name: &str, index: &SearchIndex, max_results: usize) -> Vec<SearchResult> {
        if name.trim().is_empty() || max_results == 0 {
            return Vec::new();
        }
        let weights = self.scorer.weights();
        let mut results = Vec::new();
        for category in index.categories() {
            for record in category.records() {
                let score = weighted_field_score(weights, &lookup_fields(record), name);
                if score > 0.0 {
                    results.push(SearchResult::from_record(category.name(), record, score));
                }
            }
        }
        sort_by_score_desc_stable(&mut results);
        results.truncate(max_results);
        results
    }
}

fn lookup_fields(record: &Record) -> [(ScoredField, &str); 3] {
    let fields = record.fields();
    [
        (ScoredField::Name, fields.name),
        (ScoredField::FileName, file_stem(fields.path)),
        (ScoredField::Category, fields.category),
    ]
}

fn file_stem(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Ranks with the standard scorer.
#[must_use]
pub fn rank(query: &str, index: &SearchIndex, max_results: usize) -> Vec<SearchResult> {
    ResultRanker::default().rank(query, index, max_results)
}

/// Merges per-source result lists that were scored independently.
///
/// Ties keep batch order, then order within a batch. Zero scores are dropped
/// so merging never resurrects a non-match.
#[must_use]
pub fn merge_ranked(
    batches: impl IntoIterator<Item = Vec<SearchResult>>,
    max_results: usize,
) -> Vec<SearchResult> {
    let mut merged = batches
        .into_iter()
        .flatten()
        .filter(|result| result.relevance_score > 0.0)
        .collect::<Vec<_>>();
    sort_by_score_desc_stable(&mut merged);
    merged.truncate(max_results);
    merged
}

fn sort_by_score_desc_stable(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CodeSample, Guide, RecordKind, VocabularyTerm};

    fn guide(title: &str, content: &str) -> Record {
        Record::Guide(Guide {
            title: title.to_string(),
            path: format!("handbook/{}.md", title.to_lowercase()),
            content: content.to_string(),
            section: None,
        })
    }

    fn sample(name: &str, content: &str) -> Record {
        Record::Example(CodeSample {
            name: name.to_string(),
            path: format!("samples/{name}.cpp"),
            content: content.to_string(),
            language: Some("cpp".to_string()),
            description: None,
        })
    }

    fn index_of(categories: Vec<(&str, Vec<Record>)>) -> SearchIndex {
        let mut index = SearchIndex::new();
        for (name, records) in categories {
            index.extend(name, records).expect("extend");
        }
        index
    }

    fn names(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_index_and_empty_query_yield_nothing() {
        assert!(rank("reverb", &SearchIndex::new(), 5).is_empty());
        let index = index_of(vec![("guides", vec![guide("Reverb", "room reverb")])]);
        assert!(rank("", &index, 5).is_empty());
        assert!(rank("  ", &index, 5).is_empty());
    }

    #[test]
    fn zero_scores_are_excluded() {
        let index = index_of(vec![(
            "guides",
            vec![guide("Reverb", "room reverb"), guide("Delay", "echo taps")],
        )]);
        let results = rank("reverb", &index, 10);
        assert_eq!(names(&results), vec!["Reverb"]);
        assert_eq!(results[0].kind, RecordKind::Guide);
        assert_eq!(results[0].category, "guides");
    }

    #[test]
    fn results_are_sorted_descending_and_truncated() {
        let index = index_of(vec![
            ("guides", vec![guide("Intro", "xx"), guide("Filters", "filter design")]),
            ("examples", vec![sample("filter_demo", "xx"), sample("other", "xx")]),
        ]);
        let results = rank("filter", &index, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Filters");

        let results = rank("filter", &index, 10);
        assert_eq!(names(&results), vec!["Filters", "filter_demo"]);
        assert!(
            results
                .windows(2)
                .all(|w| w[0].relevance_score >= w[1].relevance_score)
        );
    }

    #[test]
    fn equal_scores_keep_category_then_record_order() {
        let index = index_of(vec![
            ("zeta", vec![guide("B", "mix bus"), guide("A", "mix bus")]),
            ("alpha", vec![sample("c", "mix bus")]),
        ]);
        let results = rank("mix", &index, 10);
        assert_eq!(names(&results), vec!["B", "A", "c"]);
        assert_eq!(results[0].relevance_score, results[2].relevance_score);
    }

    #[test]
    fn rank_category_limits_scope() {
        let index = index_of(vec![
            ("guides", vec![guide("Mix", "mix bus")]),
            ("examples", vec![sample("mix", "mix bus")]),
        ]);
        let ranker = ResultRanker::default();
        let results = ranker.rank_category("mix", &index, "examples", 10);
        assert_eq!(names(&results), vec!["mix"]);
        assert!(ranker.rank_category("mix", &index, "missing", 10).is_empty());
    }

    #[test]
    fn merge_ranked_interleaves_sources_stably() {
        let index_a = index_of(vec![("guides", vec![guide("Gain", "gain staging")])]);
        let index_b = index_of(vec![(
            "vocabulary",
            vec![Record::VocabularyTerm(VocabularyTerm {
                key: "mixer.gain".to_string(),
                term: "Gain".to_string(),
                locale: "en".to_string(),
            })],
        )]);
        let first = rank("gain", &index_a, 5);
        let second = rank("gain", &index_b, 5);
        let merged = merge_ranked([first.clone(), second.clone()], 5);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].relevance_score, first[0].relevance_score);
        assert_eq!(merged[0].category, "guides");
        assert_eq!(merged[1].category, "vocabulary");

        let reversed = merge_ranked([second, first], 1);
        assert_eq!(reversed.len(), 1);
        assert_eq!(reversed[0].category, "vocabulary");
    }

    #[test]
    fn file_stem_strips_directories_and_extension() {
        assert_eq!(file_stem("samples/ShowStems.cpp"), "ShowStems");
        assert_eq!(file_stem("Makefile"), "Makefile");
        assert_eq!(file_stem("config/.env"), ".env");
        assert_eq!(file_stem(""), "");
    }

    #[test]
    fn lookup_prefers_exact_name() {
        let index = index_of(vec![(
            "examples",
            vec![
                sample("ShowStemsHelper", "x"),
                sample("ShowStems", "x"),
                sample("Unrelated", "x"),
            ],
        )]);
        let results = ResultRanker::default().lookup("showstems", &index, 5);
        assert_eq!(names(&results), vec!["ShowStems", "ShowStemsHelper"]);
        assert!(results[0].relevance_score > results[1].relevance_score);
    }
}
