//! Historical text module - the input records

use serde::{Deserialize, Serialize};

/// A passage of historical or descriptive text
///
/// Identity is `id`. Created by the caller and never mutated by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalText {
    /// Caller-assigned identifier
    pub id: String,

    /// The passage itself
    pub content: String,

    /// When the passage was written (caller-defined unit, typically a year)
    pub timestamp: f64,

    /// Author of the passage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Free-form date as written in the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Manuscript, book or archive the passage came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Place described by the passage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl HistoricalText {
    /// Create a text with no optional metadata
    pub fn new(id: impl Into<String>, content: impl Into<String>, timestamp: f64) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            timestamp,
            author: None,
            date: None,
            source: None,
            location: None,
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the place described
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
