//! Search Engine Integration
//!
//! Ties together tokenizing, term matching, ranking, and spelling correction:
//! tokenize the query, keep the documents that match, rank them, and fall back
//! to spelling suggestions when nothing matches.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::document::ScorableDocument;
use super::fuzzy::FuzzyMatcher;
use super::ranking::{RelevanceBreakdown, RelevanceScorer};
use super::spelling::SpellingCorrector;
use super::tokenizer::Tokenizer;
use crate::config::SearchConfig;

/// How many query terms a document must contain to be included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every term must appear in the title or description
    All,
    /// At least one term must appear
    #[default]
    Any,
}

/// A matched document with its score
#[derive(Debug, Clone)]
pub struct SearchResult<'d, D> {
    pub document: &'d D,
    pub score: f64,
    pub breakdown: RelevanceBreakdown,
}

/// Corrections offered for one query term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub term: String,
    pub corrections: Vec<String>,
}

/// Everything a search produces
#[derive(Debug, Clone)]
pub struct SearchOutcome<'d, D> {
    /// Terms extracted from the query
    pub terms: Vec<String>,
    /// Matches, highest score first
    pub results: Vec<SearchResult<'d, D>>,
    /// Only filled when the query had terms but nothing matched
    pub suggestions: Vec<Suggestion>,
}

impl<D> SearchOutcome<'_, D> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Search engine that combines tokenizing, matching, ranking, and correction
pub struct SearchEngine {
    config: SearchConfig,
    matcher: FuzzyMatcher,
    scorer: RelevanceScorer,
    corrector: Option<SpellingCorrector>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        let matcher = FuzzyMatcher::with_config(config.fuzzy.clone());
        let scorer = RelevanceScorer::with_weights(config.scoring.clone(), matcher.clone());
        Self {
            config,
            matcher,
            scorer,
            corrector: None,
        }
    }

    /// Use a fixed dictionary for suggestions instead of the searched documents' vocabulary
    pub fn with_dictionary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.corrector = Some(SpellingCorrector::with_dictionary(
            self.config.spelling.clone(),
            words,
        ));
        self
    }

    /// Search `documents` for `query`.
    ///
    /// Results are sorted by score, highest first; equal scores keep input order.
    pub fn search<'d, D: ScorableDocument>(
        &mut self,
        query: &str,
        documents: &'d [D],
    ) -> SearchOutcome<'d, D> {
        let terms = Tokenizer::tokenize(Some(query));
        debug!("Search query '{}' -> terms {:?}", query, terms);

        if terms.is_empty() {
            return SearchOutcome {
                terms,
                results: Vec::new(),
                suggestions: Vec::new(),
            };
        }

        let mut results = Vec::new();
        for document in documents {
            if !self.is_included(document, &terms) {
                continue;
            }
            let breakdown = self.scorer.breakdown(document, &terms[..]);
            trace!("'{}' scored {:?}", document.title(), breakdown);
            results.push(SearchResult {
                document,
                score: breakdown.total(),
                breakdown,
            });
        }

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        debug!("{} of {} documents matched", results.len(), documents.len());

        let suggestions = if results.is_empty() {
            self.suggest(&terms, documents)
        } else {
            Vec::new()
        };

        SearchOutcome {
            terms,
            results,
            suggestions,
        }
    }

    fn is_included<D: ScorableDocument>(&mut self, document: &D, terms: &[String]) -> bool {
        let text = match document.description() {
            Some(description) => format!("{} {}", document.title(), description),
            None => document.title().to_string(),
        };
        match self.config.match_mode {
            MatchMode::All => self.matcher.matches_all_terms(Some(text.as_str()), terms),
            MatchMode::Any => self.matcher.matches_any_term(Some(text.as_str()), terms),
        }
    }

    fn suggest<D: ScorableDocument>(&mut self, terms: &[String], documents: &[D]) -> Vec<Suggestion> {
        let limit = self.config.suggestion_limit;
        let mut from_documents;
        let corrector = match self.corrector.as_mut() {
            Some(corrector) => corrector,
            None => {
                from_documents =
                    SpellingCorrector::from_documents(self.config.spelling.clone(), documents);
                &mut from_documents
            }
        };

        let mut suggestions: Vec<Suggestion> = Vec::new();
        for term in terms {
            if suggestions.iter().any(|s| &s.term == term) {
                continue;
            }
            let corrections = corrector.corrections(term, limit);
            if !corrections.is_empty() {
                suggestions.push(Suggestion {
                    term: term.clone(),
                    corrections,
                });
            }
        }

        debug!("No matches, offering {} suggestion(s)", suggestions.len());
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::document::{BlogPost, Product};

    fn product(name: &str, description: Option<&str>) -> Product {
        Product {
            name: name.to_string(),
            description: description.map(str::to_string),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Garden hose", Some("Flexible 20m hose")),
            product("Red pump", Some("Quiet electric pump")),
            product("Pond filter", Some("Keeps the pump clean")),
            product("Watering can", None),
        ]
    }

    #[test]
    fn test_search_basic() {
        let products = catalog();
        let mut engine = SearchEngine::default();
        let outcome = engine.search("pump", &products);

        assert_eq!(outcome.terms, vec!["pump"]);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].document.name, "Red pump");
        assert_eq!(outcome.results[1].document.name, "Pond filter");
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_search_any_mode() {
        let products = catalog();
        let mut engine = SearchEngine::default();
        let outcome = engine.search("hose pump", &products);
        assert_eq!(outcome.results.len(), 3);
    }

    #[test]
    fn test_search_all_mode() {
        let products = catalog();
        let mut engine = SearchEngine::new(SearchConfig {
            match_mode: MatchMode::All,
            ..SearchConfig::default()
        });
        let outcome = engine.search("red pump", &products);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].document.name, "Red pump");
    }

    #[test]
    fn test_search_ranking_stable_ties() {
        let products = vec![product("Blue hose", None), product("Green hose", None)];
        let mut engine = SearchEngine::default();
        let outcome = engine.search("hose", &products);
        assert_eq!(outcome.results[0].document.name, "Blue hose");
        assert_eq!(outcome.results[1].document.name, "Green hose");
        assert_eq!(outcome.results[0].score, outcome.results[1].score);
    }

    #[test]
    fn test_search_typo_still_matches() {
        let products = catalog();
        let mut engine = SearchEngine::default();
        let outcome = engine.search("watring", &products);
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].document.name, "Watering can");
    }

    #[test]
    fn test_search_no_match_suggests_from_documents() {
        let products = vec![product("Cat bed", None), product("Rake", None)];
        let mut engine = SearchEngine::default();
        let outcome = engine.search("cta", &products);

        assert!(outcome.is_empty());
        assert_eq!(
            outcome.suggestions,
            vec![Suggestion {
                term: "cta".to_string(),
                corrections: vec!["cat".to_string()],
            }]
        );
    }

    #[test]
    fn test_search_no_suggestion_beyond_one_edit() {
        let products = vec![product("Sprinkler", None)];
        let mut engine = SearchEngine::default();
        let outcome = engine.search("sprnklre", &products);
        assert!(outcome.is_empty());
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_search_never_suggests_stop_words() {
        let products = vec![product("Rake", Some("Steel and ash"))];
        let mut engine = SearchEngine::default();
        let outcome = engine.search("adn", &products);
        assert!(outcome.is_empty());
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_search_no_match_with_dictionary() {
        let products = vec![product("Rake", None)];
        let mut engine = SearchEngine::default().with_dictionary(["rabbit", "habit"]);
        let outcome = engine.search("rabit", &products);

        assert!(outcome.is_empty());
        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].corrections, vec!["rabbit", "habit"]);
    }

    #[test]
    fn test_search_empty_query() {
        let products = catalog();
        let mut engine = SearchEngine::default();
        let outcome = engine.search("the a of", &products);
        assert!(outcome.terms.is_empty());
        assert!(outcome.results.is_empty());
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_search_blog_posts() {
        let posts = vec![
            BlogPost {
                title: "Winter pond care".to_string(),
                excerpt: Some("Keep your pump running".to_string()),
            },
            BlogPost {
                title: "Choosing a pump".to_string(),
                excerpt: None,
            },
        ];
        let mut engine = SearchEngine::default();
        let outcome = engine.search("pump", &posts);
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].document.title, "Choosing a pump");
    }

    #[test]
    fn test_duplicate_terms_suggested_once() {
        let products = vec![product("Rake", None)];
        let mut engine = SearchEngine::default().with_dictionary(["rabbit"]);
        let outcome = engine.search("rabit rabit", &products);
        assert_eq!(outcome.suggestions.len(), 1);
    }
}
