use std::path::Path;

use anyhow::{Context, Result};
use docscope_core::DocScope;
use docscope_core::config::AppConfig;
use docscope_core::models::{Record, SearchResult};
use tracing::debug;

use crate::cli::{Commands, SearchArgs, VocabArgs};

mod support;


use self::support::{apply_excerpt, match_report, print_json, tokenize_report};

pub(crate) fn run_from_manifest(manifest: &Path, command: Commands) -> Result<()> {
    let config = AppConfig::from_env().context("invalid DOCSCOPE_* configuration")?;
    run_validated(config, manifest, command)
}

fn run_validated(config: AppConfig, manifest: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Tokenize(args) => {
            print_json(&tokenize_report(&config, &args.query, args.min_length))?;
        }
        Commands::Match(args) => {
            print_json(&match_report(&args.text, &args.query))?;
        }
        Commands::Search(args) => {
            let mut scope = open_scope(manifest, config)?;
            let results = search_results(&mut scope, &args)?;
            print_json(&results)?;
        }
        Commands::Lookup(args) => {
            let scope = open_scope(manifest, config)?;
            let mut results = scope.lookup(&args.name, args.limit);
            apply_excerpt(&mut results, args.excerpt);
            print_json(&results)?;
        }
        Commands::Toc(args) => {
            let mut scope = open_scope(manifest, config)?;
            let entries = scope.toc(args.include_all.then_some(true))?;
            print_json(&entries)?;
        }
        Commands::Vocab(args) => {
            let mut scope = open_scope(manifest, config)?;
            match vocabulary_output(&mut scope, &args)? {
                VocabularyOutput::Ranked(results) => print_json(&results)?,
                VocabularyOutput::Terms(terms) => print_json(&terms)?,
            }
        }
        Commands::Locales => {
            let scope = open_scope(manifest, config)?;
            print_json(&scope.locales()?)?;
        }
    }
    Ok(())
}

fn open_scope(manifest: &Path, config: AppConfig) -> Result<DocScope> {
    debug!(manifest = %manifest.display(), ?config, "opening corpus");
    DocScope::open_with_config(manifest, config)
        .with_context(|| format!("failed to open corpus manifest {}", manifest.display()))
}

fn search_results(scope: &mut DocScope, args: &SearchArgs) -> Result<Vec<SearchResult>> {
    let mut results = match (&args.category, &args.locale) {
        (Some(category), _) => scope.search_category(&args.query, category, args.limit)?,
        (None, Some(locale)) => scope.search_all(&args.query, Some(locale), args.limit)?,
        (None, None) => scope.search(&args.query, args.limit),
    };
    apply_excerpt(&mut results, args.excerpt);
    Ok(results)
}

#[derive(Debug)]
enum VocabularyOutput {
    Ranked(Vec<SearchResult>),
    Terms(Vec<Record>),
}

fn vocabulary_output(scope: &mut DocScope, args: &VocabArgs) -> Result<VocabularyOutput> {
    if let Some(query) = &args.query {
        let results = scope.search_vocabulary(&args.locale, query, args.limit)?;
        return Ok(VocabularyOutput::Ranked(results));
    }
    let index = scope.vocabulary(&args.locale)?;
    let mut terms = index
        .categories()
        .flat_map(|category| category.records().iter().cloned())
        .collect::<Vec<_>>();
    if let Some(limit) = args.limit {
        terms.truncate(limit);
    }
    Ok(VocabularyOutput::Terms(terms))
}
