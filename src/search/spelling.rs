//! Spelling Corrector
//!
//! Generates every string one edit away from a misspelled word (insertion,
//! deletion, substitution, adjacent transposition) and ranks candidates.
//! Candidates that introduce a doubled consonant the original lacks come
//! first, since dropping one letter of a double is the most common typo
//! ("rabit" for "rabbit"); then smaller edit distance wins.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::distance::Levenshtein;
use super::document::ScorableDocument;
use super::tokenizer::{Tokenizer, MIN_TERM_LENGTH};

const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Settings for variant generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    /// Letters used for insertions and substitutions
    pub alphabet: String,
    /// Words shorter than this produce no variants
    pub min_word_length: usize,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            min_word_length: 3,
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether `word` has two identical adjacent consonants
fn has_doubled_consonant(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars
        .windows(2)
        .any(|pair| pair[0] == pair[1] && pair[0].is_alphabetic() && !is_vowel(pair[0]))
}

/// Spelling corrector, optionally restricted to a dictionary of known words
#[derive(Debug, Clone, Default)]
pub struct SpellingCorrector {
    config: SpellingConfig,
    dictionary: Option<BTreeSet<String>>,
    levenshtein: Levenshtein,
}

impl SpellingCorrector {
    /// Corrector that ranks raw one-edit variants
    pub fn new(config: SpellingConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Corrector that only suggests words from `words`. Stop words and
    /// tokens too short to be search terms are left out.
    pub fn with_dictionary<I, S>(config: SpellingConfig, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = words
            .into_iter()
            .flat_map(|w| {
                Tokenizer::normalize(w.as_ref())
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|w| w.chars().count() >= MIN_TERM_LENGTH && !Tokenizer::is_stop_word(w))
            .collect();

        Self {
            config,
            dictionary: Some(dictionary),
            levenshtein: Levenshtein::new(),
        }
    }

    /// Corrector whose dictionary is the vocabulary of `documents`
    pub fn from_documents<D: ScorableDocument>(config: SpellingConfig, documents: &[D]) -> Self {
        let words = documents.iter().flat_map(|doc| {
            std::iter::once(doc.title()).chain(doc.description())
        });
        Self::with_dictionary(config, words)
    }

    pub fn dictionary_len(&self) -> Option<usize> {
        self.dictionary.as_ref().map(BTreeSet::len)
    }

    /// Every distinct string one edit away from `word`, excluding `word` itself.
    ///
    /// Order: insertions, deletions, substitutions, transpositions, each left
    /// to right. Words shorter than the configured minimum yield nothing.
    pub fn variants(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
        if chars.len() < self.config.min_word_length {
            return Vec::new();
        }

        let original: String = chars.iter().collect();
        let alphabet: Vec<char> = self.config.alphabet.chars().collect();
        let mut seen = HashSet::new();
        let mut variants = Vec::new();
        let mut push = |candidate: Vec<char>| {
            let candidate: String = candidate.into_iter().collect();
            if candidate != original && seen.insert(candidate.clone()) {
                variants.push(candidate);
            }
        };

        for i in 0..=chars.len() {
            for &letter in &alphabet {
                let mut candidate = chars.clone();
                candidate.insert(i, letter);
                push(candidate);
            }
        }

        for i in 0..chars.len() {
            let mut candidate = chars.clone();
            candidate.remove(i);
            push(candidate);
        }

        for i in 0..chars.len() {
            for &letter in &alphabet {
                if letter == chars[i] {
                    continue;
                }
                let mut candidate = chars.clone();
                candidate[i] = letter;
                push(candidate);
            }
        }

        for i in 0..chars.len().saturating_sub(1) {
            if chars[i] == chars[i + 1] {
                continue;
            }
            let mut candidate = chars.clone();
            candidate.swap(i, i + 1);
            push(candidate);
        }

        variants
    }

    /// Candidate pool for `word`: its one-edit variants, narrowed to known
    /// words when there is a dictionary
    fn candidates(&self, word: &str) -> Vec<String> {
        let variants = self.variants(word);
        match &self.dictionary {
            Some(dictionary) => variants
                .into_iter()
                .filter(|variant| dictionary.contains(variant))
                .collect(),
            None => variants,
        }
    }

    /// Up to `limit` ranked corrections for `word`; empty when nothing fits
    pub fn corrections(&mut self, word: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }

        let candidates = self.candidates(word);
        let word = word.to_lowercase();
        let prefer_doubles = !has_doubled_consonant(&word);

        let mut ranked: Vec<(bool, usize, String)> = candidates
            .into_iter()
            .map(|candidate| {
                let doubled = prefer_doubles && has_doubled_consonant(&candidate);
                let distance = self.levenshtein.distance(&word, &candidate);
                (doubled, distance, candidate)
            })
            .collect();

        // Stable: ties keep generation (or dictionary) order
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        ranked.truncate(limit);
        ranked.into_iter().map(|(_, _, candidate)| candidate).collect()
    }
}

/// All distinct strings one edit away from `word` over `a`-`z`
pub fn generate_spelling_variants(word: &str) -> Vec<String> {
    SpellingCorrector::new(SpellingConfig::default()).variants(word)
}

/// Up to `limit` ranked corrections for `word` from its one-edit variants
pub fn get_top_spelling_corrections(word: &str, limit: usize) -> Vec<String> {
    SpellingCorrector::new(SpellingConfig::default()).corrections(word, limit)
}
