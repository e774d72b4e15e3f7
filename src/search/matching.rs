//! Text/Term Matching
//!
//! Checks whether query terms occur inside a block of text, word by word,
//! using the fuzzy matcher. Absent or empty text and empty terms yield
//! `false`/`0` rather than errors.

use super::fuzzy::FuzzyMatcher;
use super::tokenizer::Tokenizer;

/// Split text into normalized words, or `None` when there is nothing to search
fn text_words(text: Option<&str>) -> Option<Vec<String>> {
    let normalized = Tokenizer::normalize(text?);
    let words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        None
    } else {
        Some(words)
    }
}

/// Normalize a single term the same way text is normalized
fn normalize_term(term: &str) -> String {
    Tokenizer::normalize(term).trim().to_string()
}

impl FuzzyMatcher {
    fn words_contain(&mut self, words: &[String], term: &str) -> bool {
        let term = normalize_term(term);
        if term.is_empty() {
            return false;
        }
        words.iter().any(|word| self.is_match(word, &term))
    }

    /// Whether any word of `text` fuzzily matches `term`
    pub fn text_contains_term(&mut self, text: Option<&str>, term: &str) -> bool {
        match text_words(text) {
            Some(words) => self.words_contain(&words, term),
            None => false,
        }
    }

    /// Count how many of `terms` occur in `text`. Duplicate terms count once each.
    pub fn count_matching_terms<S: AsRef<str>>(&mut self, text: Option<&str>, terms: &[S]) -> usize {
        let Some(words) = text_words(text) else {
            return 0;
        };
        terms
            .iter()
            .filter(|&term| self.words_contain(&words, term.as_ref()))
            .count()
    }

    /// Whether every term occurs in `text`. An empty term list never matches.
    pub fn matches_all_terms<S: AsRef<str>>(&mut self, text: Option<&str>, terms: &[S]) -> bool {
        if terms.is_empty() {
            return false;
        }
        let Some(words) = text_words(text) else {
            return false;
        };
        terms
            .iter()
            .all(|term| self.words_contain(&words, term.as_ref()))
    }

    /// Whether at least one term occurs in `text`
    pub fn matches_any_term<S: AsRef<str>>(&mut self, text: Option<&str>, terms: &[S]) -> bool {
        let Some(words) = text_words(text) else {
            return false;
        };
        terms
            .iter()
            .any(|term| self.words_contain(&words, term.as_ref()))
    }
}

/// Whether `text` contains `term` (exactly, by stem, or fuzzily)
pub fn text_contains_term(text: Option<&str>, term: &str) -> bool {
    FuzzyMatcher::new().text_contains_term(text, term)
}

/// Number of `terms` found in `text`
pub fn count_matching_terms<S: AsRef<str>>(text: Option<&str>, terms: &[S]) -> usize {
    FuzzyMatcher::new().count_matching_terms(text, terms)
}

/// Whether all `terms` are found in `text`
pub fn matches_all_terms<S: AsRef<str>>(text: Option<&str>, terms: &[S]) -> bool {
    FuzzyMatcher::new().matches_all_terms(text, terms)
}

/// Whether any of `terms` is found in `text`
pub fn matches_any_term<S: AsRef<str>>(text: Option<&str>, terms: &[S]) -> bool {
    FuzzyMatcher::new().matches_any_term(text, terms)
}
