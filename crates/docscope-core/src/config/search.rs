use crate::error::{DocScopeError, Result};

use super::env::{parse_enabled_default_false, read_env_usize, read_non_empty_env};

const ENV_MAX_RESULTS: &str = "DOCSCOPE_MAX_RESULTS";
const ENV_LOOKUP_MAX_RESULTS: &str = "DOCSCOPE_LOOKUP_MAX_RESULTS";
const ENV_MIN_TOKEN_LEN: &str = "DOCSCOPE_MIN_TOKEN_LEN";
const ENV_TOC_INCLUDE_ALL: &str = "DOCSCOPE_TOC_INCLUDE_ALL";
const ENV_MULTI_WORD_MODE: &str = "DOCSCOPE_MULTI_WORD_MODE";

pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_LOOKUP_MAX_RESULTS: usize = 5;
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// How the token stage rewards queries where several words matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MultiWordMode {
    /// `MULTI_WORD_BONUS * matched / total` added on top of per-token weights.
    #[default]
    Additive,
    /// Tiered bonus using the HIGH/MEDIUM thresholds and their base scores.
    Coarse,
}

impl MultiWordMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Coarse => "coarse",
        }
    }

    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let normalized = raw.map(|value| value.trim().to_ascii_lowercase());
        match normalized.as_deref() {
            None | Some("") => Ok(Self::Additive),
            Some("additive") => Ok(Self::Additive),
            Some("coarse") => Ok(Self::Coarse),
            Some(other) => Err(DocScopeError::Validation(format!(
                "invalid {ENV_MULTI_WORD_MODE}: {other} (expected additive|coarse)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_results: usize,
    pub lookup_max_results: usize,
    pub min_token_len: usize,
    pub multi_word_mode: MultiWordMode,
}

impl SearchConfig {
    pub(super) fn from_env() -> Result<Self> {
        Ok(Self {
            max_results: read_env_usize(ENV_MAX_RESULTS, DEFAULT_MAX_RESULTS, 1),
            lookup_max_results: read_env_usize(
                ENV_LOOKUP_MAX_RESULTS,
                DEFAULT_LOOKUP_MAX_RESULTS,
                1,
            ),
            min_token_len: read_env_usize(ENV_MIN_TOKEN_LEN, DEFAULT_MIN_TOKEN_LEN, 1),
            multi_word_mode: MultiWordMode::parse(
                read_non_empty_env(ENV_MULTI_WORD_MODE).as_deref(),
            )?,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            lookup_max_results: DEFAULT_LOOKUP_MAX_RESULTS,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            multi_word_mode: MultiWordMode::Additive,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocConfig {
    pub include_all: bool,
}

impl TocConfig {
    #[must_use]
    pub(super) fn from_env() -> Self {
        Self {
            include_all: parse_enabled_default_false(
                std::env::var(ENV_TOC_INCLUDE_ALL).ok().as_deref(),
            ),
        }
    }
}
