//! Error types for loading configuration and documents
//!
//! The matching and scoring operations themselves are total and never fail;
//! only the file-facing edges of the crate return these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Short machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            SearchError::InvalidInput(_) => "invalid_input",
            SearchError::Io(_) => "io_error",
            SearchError::Json(_) => "json_error",
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            SearchError::InvalidInput(_) | SearchError::Json(_) => 1,
            SearchError::Io(_) => 3,
        }
    }
}
