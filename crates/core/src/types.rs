//! Data model for help-center search
//!
//! - DocumentId: opaque upstream identifier (number or string)
//! - Document: one article as loaded from a content source
//! - RankedResult: public projection of a document that survived ranking
//! - SearchResponse: `{ results, count }` returned by a search
//! - SearchStats: per-request execution statistics (logged, not returned)

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DocumentId
// ============================================================================

/// Opaque document identifier
///
/// Preserves the JSON form the upstream used so that ids round-trip
/// unchanged into search results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    /// Numeric identifier (Zendesk article ids)
    Number(u64),
    /// Textual identifier
    Text(String),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for DocumentId {
    fn from(n: u64) -> Self {
        DocumentId::Number(n)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId::Text(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId::Text(s)
    }
}

// ============================================================================
// Document
// ============================================================================

/// A help-center article
///
/// Immutable once loaded. A corpus owns its documents for the lifetime of
/// one search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Upstream identifier
    pub id: DocumentId,

    /// Article title
    #[serde(default)]
    pub title: String,

    /// Article body, absent when the upstream sent none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Public URL of the article
    #[serde(default)]
    pub url: String,
}

impl Document {
    /// Create a document with a title and no body
    pub fn new(id: impl Into<DocumentId>, title: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            title: title.into(),
            body: None,
            url: String::new(),
        }
    }

    /// Builder: set body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builder: set url
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Body text, empty when absent
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

// ============================================================================
// RankedResult / SearchResponse
// ============================================================================

/// Public projection of a ranked document
///
/// `body` is always present; an absent upstream body becomes `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Upstream identifier
    pub id: DocumentId,
    /// Article title
    pub title: String,
    /// Article body
    pub body: String,
    /// Public URL of the article
    pub url: String,
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked results, best first
    pub results: Vec<RankedResult>,
    /// Number of results (always `results.len()`)
    pub count: usize,
}

impl SearchResponse {
    /// Build a response, deriving `count` from the results
    pub fn new(results: Vec<RankedResult>) -> Self {
        let count = results.len();
        SearchResponse { results, count }
    }

    /// Response with no results
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Check if there are no results
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// ============================================================================
// SearchStats
// ============================================================================

/// Execution statistics for one search
///
/// Reported through logging. Degradation is never surfaced to the caller
/// as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Pages successfully retrieved from the content source
    pub pages_fetched: usize,
    /// Documents in the loaded corpus
    pub corpus_size: usize,
    /// Documents that matched every token (before truncation to K)
    pub candidates_matched: usize,
    /// True if pagination stopped early because of an upstream failure
    pub degraded: bool,
    /// Wall time of the whole search in microseconds
    pub elapsed_micros: u64,
}
