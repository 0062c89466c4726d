use clap::Args;

use super::parsers::parse_min_one_usize;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    #[arg(long, value_parser = parse_min_one_usize)]
    pub limit: Option<usize>,
    /// Restrict ranking to one index category.
    #[arg(long)]
    pub category: Option<String>,
    /// Also search this locale's vocabulary and merge the results.
    #[arg(long, conflicts_with = "category")]
    pub locale: Option<String>,
    /// Shorten each result's content to this many characters.
    #[arg(long, value_parser = parse_min_one_usize)]
    pub excerpt: Option<usize>,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    #[arg(long, value_parser = parse_min_one_usize)]
    pub limit: Option<usize>,
    #[arg(long, value_parser = parse_min_one_usize)]
    pub excerpt: Option<usize>,
}

#[derive(Debug, Args)]
pub struct TocArgs {
    /// Keep headings that have no page file.
    #[arg(long, default_value_t = false)]
    pub include_all: bool,
}

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[arg(allow_hyphen_values = true)]
    pub query: String,
    #[arg(long, value_parser = parse_min_one_usize)]
    pub min_length: Option<usize>,
}

#[derive(Debug, Args)]
pub struct VocabArgs {
    pub locale: String,
    #[arg(long, allow_hyphen_values = true)]
    pub query: Option<String>,
    #[arg(long, value_parser = parse_min_one_usize)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct MatchArgs {
    #[arg(allow_hyphen_values = true)]
    pub text: String,
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}
