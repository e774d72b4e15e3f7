//! Fuzzy Word Matcher
//!
//! Decides whether two words name the same search concept. Strategies are
//! tried cheapest first and the first success wins:
//!
//! 1. exact match (case-insensitive)
//! 2. equal stems
//! 3. one word is a prefix of the other (with a minimum prefix length)
//! 4. edit distance within a tolerance that grows with word length

use serde::{Deserialize, Serialize};

use super::distance::Levenshtein;
use super::stemmer::stem;

/// Tolerance tiers and prefix guard for fuzzy word matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Shortest prefix that may match a longer word
    pub min_prefix_length: usize,
    /// Words up to this length get `short_word_max_edits`
    pub short_word_max_len: usize,
    /// Words up to this length (and above the short tier) get `medium_word_max_edits`
    pub medium_word_max_len: usize,
    pub short_word_max_edits: usize,
    pub medium_word_max_edits: usize,
    /// Everything longer than the medium tier
    pub long_word_max_edits: usize,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            min_prefix_length: 3,
            short_word_max_len: 3,
            medium_word_max_len: 5,
            short_word_max_edits: 0,
            medium_word_max_edits: 1,
            long_word_max_edits: 2,
        }
    }
}

impl FuzzyConfig {
    /// Edits allowed between two words whose longer one has `len` characters
    pub fn max_edits(&self, len: usize) -> usize {
        if len <= self.short_word_max_len {
            self.short_word_max_edits
        } else if len <= self.medium_word_max_len {
            self.medium_word_max_edits
        } else {
            self.long_word_max_edits
        }
    }
}

/// Which strategy accepted a pair of words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Stem,
    Prefix,
    EditDistance,
}

/// Fuzzy matcher with configuration and a reusable distance buffer
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: FuzzyConfig,
    levenshtein: Levenshtein,
}

impl FuzzyMatcher {
    /// Create a new fuzzy matcher with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fuzzy matcher with custom configuration
    pub fn with_config(config: FuzzyConfig) -> Self {
        Self {
            config,
            levenshtein: Levenshtein::new(),
        }
    }

    /// Whether `a` and `b` should be treated as the same word
    pub fn is_match(&mut self, a: &str, b: &str) -> bool {
        self.classify(a, b).is_some()
    }

    /// Return the first strategy that accepts the pair, if any.
    ///
    /// Empty words never match anything.
    pub fn classify(&mut self, a: &str, b: &str) -> Option<MatchKind> {
        let a = a.to_lowercase();
        let b = b.to_lowercase();

        if a.is_empty() || b.is_empty() {
            return None;
        }

        if a == b {
            return Some(MatchKind::Exact);
        }

        if stem(&a) == stem(&b) {
            return Some(MatchKind::Stem);
        }

        let a_len = a.chars().count();
        let b_len = b.chars().count();
        let (shorter, shorter_len, longer) = if a_len <= b_len {
            (&a, a_len, &b)
        } else {
            (&b, b_len, &a)
        };

        if shorter_len >= self.config.min_prefix_length && longer.starts_with(shorter.as_str()) {
            return Some(MatchKind::Prefix);
        }

        let allowed = self.config.max_edits(a_len.max(b_len));
        // Length gap alone already exceeds the budget
        if a_len.abs_diff(b_len) > allowed {
            return None;
        }

        if self.levenshtein.distance(&a, &b) <= allowed {
            Some(MatchKind::EditDistance)
        } else {
            None
        }
    }
}

/// Whether two words should be treated as the same search concept
pub fn is_fuzzy_match(a: &str, b: &str) -> bool {
    FuzzyMatcher::new().is_match(a, b)
}
