//! shopfront-search
//!
//! Search relevance and typo correction for storefront product and blog
//! search. Every operation is a pure function over in-memory strings: no I/O,
//! no shared state, safe to call from any number of threads.
//!
//! - `tokenize(query)` - split a query into search terms
//! - `stem(word)` - crude suffix-stripping stemmer
//! - `edit_distance(a, b)` - case-insensitive Levenshtein distance
//! - `is_fuzzy_match(a, b)` - exact / stem / prefix / edit-distance word match
//! - `text_contains_term`, `count_matching_terms`, `matches_all_terms`, `matches_any_term`
//! - `calculate_relevance_score(doc, terms)` - additive title/description score
//! - `generate_spelling_variants(word)`, `get_top_spelling_corrections(word, limit)`

pub mod config;
pub mod error;
pub mod search;

pub use config::SearchConfig;
pub use error::SearchError;
pub use search::*;
