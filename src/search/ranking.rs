//! Ranking & Scoring System
//!
//! Additive relevance scoring for documents against query terms. Title hits
//! outweigh description hits, and two bonuses reward a title that starts with
//! a query term and a title that covers every query term. There are no
//! penalties, so the floor is zero.

use serde::{Deserialize, Serialize};

use super::document::ScorableDocument;
use super::fuzzy::FuzzyMatcher;
use super::tokenizer::Tokenizer;

/// Scoring weights for the relevance signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Points per query term found in the title
    pub title_match: f64,
    /// Points per query term found only in the description
    pub description_match: f64,
    /// Bonus when the title starts with any query term
    pub title_start_bonus: f64,
    /// Bonus when every query term is found in the title
    pub all_terms_in_title_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_match: 10.0,
            description_match: 3.0,
            title_start_bonus: 5.0,
            all_terms_in_title_bonus: 15.0,
        }
    }
}

/// Components of a relevance score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelevanceBreakdown {
    /// Query terms found in the title
    pub title_matches: usize,
    /// Query terms found in the description but not the title
    pub description_matches: usize,
    pub title_points: f64,
    pub description_points: f64,
    pub title_start_bonus: f64,
    pub coverage_bonus: f64,
}

impl RelevanceBreakdown {
    /// Final score
    pub fn total(&self) -> f64 {
        self.title_points + self.description_points + self.title_start_bonus + self.coverage_bonus
    }

    /// Number of query terms found anywhere in the document
    pub fn matched_terms(&self) -> usize {
        self.title_matches + self.description_matches
    }
}

/// Scores documents against query terms
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    weights: ScoringWeights,
    matcher: FuzzyMatcher,
}

impl RelevanceScorer {
    /// Create a scorer with default weights and matcher
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights, matcher: FuzzyMatcher) -> Self {
        Self { weights, matcher }
    }

    /// Score a document and report how the score was assembled
    pub fn breakdown<D, S>(&mut self, document: &D, terms: &[S]) -> RelevanceBreakdown
    where
        D: ScorableDocument + ?Sized,
        S: AsRef<str>,
    {
        let mut breakdown = RelevanceBreakdown::default();
        if terms.is_empty() {
            return breakdown;
        }

        let title = Some(document.title());
        let description = document.description();

        for term in terms {
            let term = term.as_ref();
            if self.matcher.text_contains_term(title, term) {
                breakdown.title_matches += 1;
            } else if self.matcher.text_contains_term(description, term) {
                breakdown.description_matches += 1;
            }
        }

        breakdown.title_points = breakdown.title_matches as f64 * self.weights.title_match;
        breakdown.description_points =
            breakdown.description_matches as f64 * self.weights.description_match;

        if title_starts_with_any(document.title(), terms) {
            breakdown.title_start_bonus = self.weights.title_start_bonus;
        }

        if breakdown.title_matches == terms.len() {
            breakdown.coverage_bonus = self.weights.all_terms_in_title_bonus;
        }

        breakdown
    }

    /// Relevance score of a document for the given terms
    pub fn score<D, S>(&mut self, document: &D, terms: &[S]) -> f64
    where
        D: ScorableDocument + ?Sized,
        S: AsRef<str>,
    {
        self.breakdown(document, terms).total()
    }
}

/// Whether the normalized title begins with any non-empty normalized term
fn title_starts_with_any<S: AsRef<str>>(title: &str, terms: &[S]) -> bool {
    let title = Tokenizer::normalize(title);
    let title = title.trim_start();
    terms.iter().any(|term| {
        let term = Tokenizer::normalize(term.as_ref());
        let term = term.trim();
        !term.is_empty() && title.starts_with(term)
    })
}

/// Relevance score of `document` for `terms` using default weights
pub fn calculate_relevance_score<D, S>(document: &D, terms: &[S]) -> f64
where
    D: ScorableDocument + ?Sized,
    S: AsRef<str>,
{
    RelevanceScorer::new().score(document, terms)
}
