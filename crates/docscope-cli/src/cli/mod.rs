use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docscope_core::corpus::DEFAULT_MANIFEST_FILE;

mod args;
mod parsers;


pub use args::{LookupArgs, MatchArgs, SearchArgs, TocArgs, TokenizeArgs, VocabArgs};

#[derive(Debug, Parser)]
#[command(name = "docscope")]
#[command(about = "Search, lookup and table-of-contents tools for documentation corpora", version)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank every indexed record against a query.
    Search(SearchArgs),
    /// Find records by plugin, class or file name.
    Lookup(LookupArgs),
    /// Rebuild the table of contents from the manifest's `[toc]` section.
    Toc(TocArgs),
    /// Show how a query is split into scoring tokens.
    Tokenize(TokenizeArgs),
    /// Search a locale's vocabulary, or list its terms.
    Vocab(VocabArgs),
    /// Score one text against one query with the match scorer.
    Match(MatchArgs),
    /// List locales that have a vocabulary file.
    Locales,
}
