//! Scorable documents
//!
//! The engine never owns catalog or blog data; it only reads a title and an
//! optional description from whatever record the caller hands it.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// A record that can be matched and ranked
pub trait ScorableDocument {
    /// Primary text, weighted highest when scoring
    fn title(&self) -> &str;

    /// Secondary text, if the record has one
    fn description(&self) -> Option<&str> {
        None
    }
}

/// Catalog product as supplied by the product service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ScorableDocument for Product {
    fn title(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Blog post summary as supplied by the content service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl ScorableDocument for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }
}

impl<T: ScorableDocument + ?Sized> ScorableDocument for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

/// Load a JSON array of documents from disk
pub fn load_documents<D: DeserializeOwned>(path: &Path) -> Result<Vec<D>, SearchError> {
    let data = fs::read_to_string(path)?;
    let documents = serde_json::from_str(&data)?;
    Ok(documents)
}
