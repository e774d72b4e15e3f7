//! Search configuration
//!
//! Every knob has a default reproducing the stock behaviour, so an empty JSON
//! object (or no config file at all) is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::search::{FuzzyConfig, MatchMode, ScoringWeights, SpellingConfig};

/// Number of spelling corrections offered per term by default
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub scoring: ScoringWeights,
    pub fuzzy: FuzzyConfig,
    pub spelling: SpellingConfig,
    pub match_mode: MatchMode,
    pub suggestion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            fuzzy: FuzzyConfig::default(),
            spelling: SpellingConfig::default(),
            match_mode: MatchMode::default(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(data: &str) -> Result<Self, SearchError> {
        let config: SearchConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SearchError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.spelling.alphabet.is_empty() {
            return Err(SearchError::InvalidInput(
                "spelling.alphabet cannot be empty".to_string(),
            ));
        }
        if self.fuzzy.min_prefix_length == 0 {
            return Err(SearchError::InvalidInput(
                "fuzzy.min_prefix_length must be at least 1".to_string(),
            ));
        }
        if self.fuzzy.short_word_max_len > self.fuzzy.medium_word_max_len {
            return Err(SearchError::InvalidInput(
                "fuzzy.short_word_max_len cannot exceed fuzzy.medium_word_max_len".to_string(),
            ));
        }

        let weights = [
            self.scoring.title_match,
            self.scoring.description_match,
            self.scoring.title_start_bonus,
            self.scoring.all_terms_in_title_bonus,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SearchError::InvalidInput(
                "scoring weights must be finite and non-negative".to_string(),
            ));
        }

        Ok(())
    }
}
