//! Query Tokenizer
//!
//! Splits raw queries into normalized search terms and filters stop words
//! and tokens too short to carry meaning.

use unicode_normalization::UnicodeNormalization;

/// Stop words that are never treated as search terms
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "if", "in", "into",
    "is", "it", "its", "nor", "of", "on", "onto", "or", "over", "so", "than", "that", "the",
    "to", "up", "was", "with", "yet",
];

/// Minimum character count for a token to survive tokenization
pub const MIN_TERM_LENGTH: usize = 2;

/// Query tokenizer
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenize a raw query into ordered search terms.
    ///
    /// Duplicates are kept and order follows the input. Absent, blank, or
    /// all-stop-word input yields an empty list.
    pub fn tokenize(query: Option<&str>) -> Vec<String> {
        let Some(query) = query else {
            return Vec::new();
        };

        Self::normalize(query)
            .split_whitespace()
            .filter(|w| !Self::is_stop_word(w))
            .filter(|w| w.chars().count() >= MIN_TERM_LENGTH)
            .map(str::to_string)
            .collect()
    }

    /// Lowercase and drop every character that is not a letter, digit, or whitespace
    pub fn normalize(text: &str) -> String {
        text.nfc()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect()
    }

    /// Check if a word is a stop word
    pub fn is_stop_word(word: &str) -> bool {
        STOP_WORDS.contains(&word)
    }
}

/// Tokenize a raw query into search terms
pub fn tokenize(query: Option<&str>) -> Vec<String> {
    Tokenizer::tokenize(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenize() {
        assert_eq!(tokenize(Some("red pump")), vec!["red", "pump"]);
    }

    #[test]
    fn test_stop_words_filtering() {
        assert_eq!(tokenize(Some("the red pump")), vec!["red", "pump"]);
        assert_eq!(tokenize(Some("pumps for the garden")), vec!["pumps", "garden"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        // "cd" sits exactly on the length cutoff and is kept
        assert_eq!(tokenize(Some("a b cd pump")), vec!["cd", "pump"]);
        assert_eq!(tokenize(Some("x y z")), Vec::<String>::new());
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(tokenize(Some("Hello, World!")), vec!["hello", "world"]);
        assert_eq!(tokenize(Some("kid's shoes")), vec!["kids", "shoes"]);
        assert_eq!(tokenize(Some("3-way valve")), vec!["3way", "valve"]);
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(tokenize(Some("RED Pump")), vec!["red", "pump"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(tokenize(Some("pump pump")), vec!["pump", "pump"]);
    }

    #[test]
    fn test_empty_query() {
        assert!(tokenize(Some("")).is_empty());
        assert!(tokenize(Some("   \t\n ")).is_empty());
        assert!(tokenize(None).is_empty());
    }

    #[test]
    fn test_only_stop_words() {
        assert!(tokenize(Some("the and or for")).is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize(Some("Café résumé")), vec!["café", "résumé"]);
    }

    #[test]
    fn test_terms_have_no_punctuation_or_whitespace() {
        for term in tokenize(Some("  wow!! such -- query... (very) [good] ")) {
            assert!(term.chars().all(char::is_alphanumeric), "bad term {term:?}");
        }
    }
}
