use crate::error::Result;

mod env;
mod search;

pub use search::{
    DEFAULT_LOOKUP_MAX_RESULTS, DEFAULT_MAX_RESULTS, DEFAULT_MIN_TOKEN_LEN, MultiWordMode,
    SearchConfig, TocConfig,
};

/// Runtime settings resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub toc: TocConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            search: SearchConfig::from_env()?,
            toc: TocConfig::from_env(),
        })
    }
}
