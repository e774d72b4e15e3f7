//! CLI mode implementation
//!
//! Exposes each engine operation as a subcommand for ad-hoc inspection of
//! tokenizing, matching, scoring, and correction behaviour.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// shopfront-search CLI
#[derive(Parser, Debug)]
#[command(name = "shopfront-search")]
#[command(about = "Storefront search relevance and typo-correction utility", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// JSON configuration file (weights, fuzzy tiers, alphabet, match mode)
    #[arg(short, long, global = true, env = "SHOPFRONT_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a query into search terms
    Tokenize {
        /// Raw query text
        query: String,
    },
    /// Reduce a word to its stem
    Stem {
        word: String,
    },
    /// Levenshtein distance between two strings
    Distance {
        a: String,
        b: String,
    },
    /// Check whether two words fuzzily match
    Match {
        a: String,
        b: String,
    },
    /// List every one-edit spelling variant of a word
    Variants {
        word: String,
    },
    /// Ranked spelling corrections for a word
    Suggest(SuggestArgs),
    /// Score a single document against a query
    Score(ScoreArgs),
    /// Search a JSON file of documents
    Search(SearchArgs),
}

/// Suggest command arguments
#[derive(Parser, Debug)]
pub struct SuggestArgs {
    /// Possibly misspelled word
    pub word: String,

    /// Maximum number of corrections
    #[arg(short = 'l', long, default_value_t = 5)]
    pub limit: usize,

    /// File of known words (whitespace separated); raw variants are ranked when omitted
    #[arg(short = 'd', long)]
    pub dictionary: Option<PathBuf>,
}

/// Score command arguments
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Search query
    pub query: String,

    /// Document title
    #[arg(short = 't', long)]
    pub title: String,

    /// Document description
    #[arg(short = 'D', long)]
    pub description: Option<String>,
}

/// Shape of the records in a documents file
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentKind {
    /// `{ "name": ..., "description": ... }`
    #[default]
    Product,
    /// `{ "title": ..., "excerpt": ... }`
    Post,
}

/// Search command arguments
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// JSON array of documents
    #[arg(short = 'f', long)]
    pub documents: PathBuf,

    /// Record shape of the documents file
    #[arg(short = 'k', long, value_enum, default_value_t = DocumentKind::Product)]
    pub kind: DocumentKind,

    /// Maximum number of results
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,
}
