//! Search relevance and typo correction
//!
//! Leaf algorithms (tokenizer, stemmer, edit distance) feed the fuzzy matcher,
//! which term matching, ranking, and the search engine build on.

pub mod distance;
pub mod document;
pub mod engine;
pub mod fuzzy;
pub mod matching;
pub mod ranking;
pub mod spelling;
pub mod stemmer;
pub mod tokenizer;

#[cfg(test)]
mod property_tests;

pub use distance::{edit_distance, Levenshtein};
pub use document::{load_documents, BlogPost, Product, ScorableDocument};
pub use engine::{MatchMode, SearchEngine, SearchOutcome, SearchResult, Suggestion};
pub use fuzzy::{is_fuzzy_match, FuzzyConfig, FuzzyMatcher, MatchKind};
pub use matching::{count_matching_terms, matches_all_terms, matches_any_term, text_contains_term};
pub use ranking::{calculate_relevance_score, RelevanceBreakdown, RelevanceScorer, ScoringWeights};
pub use spelling::{
    generate_spelling_variants, get_top_spelling_corrections, SpellingConfig, SpellingCorrector,
};
pub use stemmer::stem;
pub use tokenizer::{tokenize, Tokenizer, MIN_TERM_LENGTH};
