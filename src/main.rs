//! shopfront-search CLI (Rust)
//!
//! Command-line front end for the search relevance and typo-correction
//! engine. Each subcommand runs one engine operation and prints the result:
//! - `tokenize`, `stem`, `distance`, `match` - the matching primitives
//! - `variants`, `suggest` - spelling correction
//! - `score`, `search` - relevance ranking

mod cli;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, DocumentKind, ScoreArgs, SearchArgs, SuggestArgs};
use shopfront_search::search::{
    edit_distance, load_documents, stem, tokenize, BlogPost, FuzzyMatcher, Product,
    RelevanceScorer, ScorableDocument, SearchEngine, SpellingCorrector,
};
use shopfront_search::{SearchConfig, SearchError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            match e.downcast_ref::<SearchError>() {
                Some(search_error) => eprintln!("Error [{}]: {:#}", search_error.error_code(), e),
                None => eprintln!("Error: {:#}", e),
            }
            std::process::exit(get_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = SearchConfig::load_or_default(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        info!("Loaded configuration from {}", path.display());
    }

    match cli.command {
        Commands::Tokenize { query } => Ok(tokenize(Some(&query)).join("\n")),
        Commands::Stem { word } => Ok(stem(&word.to_lowercase())),
        Commands::Distance { a, b } => Ok(edit_distance(&a, &b).to_string()),
        Commands::Match { a, b } => execute_match(&config, &a, &b),
        Commands::Variants { word } => execute_variants(&config, &word),
        Commands::Suggest(args) => execute_suggest(&config, args),
        Commands::Score(args) => execute_score(&config, args),
        Commands::Search(args) => execute_search(config, args),
    }
}

fn execute_match(config: &SearchConfig, a: &str, b: &str) -> Result<String> {
    let mut matcher = FuzzyMatcher::with_config(config.fuzzy.clone());
    Ok(match matcher.classify(a, b) {
        Some(kind) => format!("match ({:?})", kind).to_lowercase(),
        None => "no match".to_string(),
    })
}

fn execute_variants(config: &SearchConfig, word: &str) -> Result<String> {
    let variants = SpellingCorrector::new(config.spelling.clone()).variants(word);
    debug!("{} variants for '{}'", variants.len(), word);
    Ok(variants.join("\n"))
}

fn execute_suggest(config: &SearchConfig, args: SuggestArgs) -> Result<String> {
    let mut corrector = match &args.dictionary {
        Some(path) => {
            let data = fs::read_to_string(path)
                .map_err(SearchError::from)
                .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
            let corrector =
                SpellingCorrector::with_dictionary(config.spelling.clone(), data.split_whitespace());
            debug!("Loaded {:?} dictionary words", corrector.dictionary_len());
            corrector
        }
        None => SpellingCorrector::new(config.spelling.clone()),
    };

    let corrections = corrector.corrections(&args.word, args.limit);
    if corrections.is_empty() {
        return Ok(format!("No suggestions for '{}'", args.word));
    }
    Ok(corrections.join("\n"))
}

fn execute_score(config: &SearchConfig, args: ScoreArgs) -> Result<String> {
    let document = Product {
        name: args.title,
        description: args.description,
    };
    let terms = tokenize(Some(&args.query));
    let mut scorer = RelevanceScorer::with_weights(
        config.scoring.clone(),
        FuzzyMatcher::with_config(config.fuzzy.clone()),
    );
    let breakdown = scorer.breakdown(&document, &terms[..]);

    Ok(format!(
        "score: {}\n  title matches: {} (+{})\n  description matches: {} (+{})\n  title start bonus: +{}\n  all terms in title bonus: +{}",
        breakdown.total(),
        breakdown.title_matches,
        breakdown.title_points,
        breakdown.description_matches,
        breakdown.description_points,
        breakdown.title_start_bonus,
        breakdown.coverage_bonus,
    ))
}

fn execute_search(config: SearchConfig, args: SearchArgs) -> Result<String> {
    match args.kind {
        DocumentKind::Product => {
            let documents: Vec<Product> = read_documents(&args.documents)?;
            Ok(search_documents(config, &args, &documents))
        }
        DocumentKind::Post => {
            let documents: Vec<BlogPost> = read_documents(&args.documents)?;
            Ok(search_documents(config, &args, &documents))
        }
    }
}

fn read_documents<D: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<D>> {
    let documents = load_documents(path)
        .with_context(|| format!("Failed to load documents from {}", path.display()))?;
    Ok(documents)
}

fn search_documents<D: ScorableDocument>(
    config: SearchConfig,
    args: &SearchArgs,
    documents: &[D],
) -> String {
    let mut engine = SearchEngine::new(config);
    let outcome = engine.search(&args.query, documents);

    if outcome.terms.is_empty() {
        return "No searchable terms in query".to_string();
    }

    if outcome.is_empty() {
        let mut output = format!("No results for '{}'", args.query);
        for suggestion in &outcome.suggestions {
            output.push_str(&format!(
                "\n  did you mean ({}): {}",
                suggestion.term,
                suggestion.corrections.join(", ")
            ));
        }
        return output;
    }

    let limit = args.limit.unwrap_or(outcome.results.len());
    let mut output = format!("{} result(s) for '{}'", outcome.results.len(), args.query);
    for result in outcome.results.iter().take(limit) {
        output.push_str(&format!("\n{:>8.1}  {}", result.score, result.document.title()));
    }
    output
}

/// Map errors to exit codes
fn get_exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SearchError>() {
        Some(search_error) => search_error.exit_code(),
        None => 5,
    }
}
