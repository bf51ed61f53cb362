use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::safety::KeywordLists;
use crate::scoring::profile::EngineConfig;
use crate::scoring::rates::RateCard;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. All
/// overrides are optional — the engine ships with compiled defaults for
/// the rate card and the brand-safety keyword lists.
pub struct Config {
    /// Path to a JSON rate card overriding the compiled defaults
    /// (LIMELIGHT_RATE_CARD env var).
    pub rate_card_path: Option<PathBuf>,
    /// Path to a JSON keyword-list file overriding the compiled defaults
    /// (LIMELIGHT_KEYWORDS env var).
    pub keywords_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            rate_card_path: env::var("LIMELIGHT_RATE_CARD").ok().map(PathBuf::from),
            keywords_path: env::var("LIMELIGHT_KEYWORDS").ok().map(PathBuf::from),
        })
    }

    /// Build the engine configuration, resolving file overrides.
    ///
    /// A configured path that fails to load is an error, not a silent
    /// fallback to the defaults.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let rate_card = match &self.rate_card_path {
            Some(path) => RateCard::load(path)?,
            None => RateCard::default(),
        };
        let keywords = match &self.keywords_path {
            Some(path) => KeywordLists::load(path)?,
            None => KeywordLists::default(),
        };
        Ok(EngineConfig {
            weights: Default::default(),
            rate_card,
            keywords,
        })
    }
}
