//! Content source abstraction
//!
//! The search engine never talks HTTP itself. It walks a [`ContentSource`]
//! page by page, which lets the Help Center client, the in-memory source
//! and test doubles be swapped without touching the ranking code.

use crate::error::Result;
use crate::types::Document;
use std::fmt;

/// Opaque cursor naming one page of a content source
///
/// The HTTP source uses absolute URLs, the in-memory source uses page
/// numbers. Callers never inspect the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageLocator(String);

impl PageLocator {
    /// Wrap a source-specific cursor
    pub fn new(locator: impl Into<String>) -> Self {
        PageLocator(locator.into())
    }

    /// Raw cursor value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Documents in upstream order
    pub documents: Vec<Document>,
    /// Locator of the following page; `None` ends pagination
    pub next: Option<PageLocator>,
}

impl Page {
    /// Create a page
    pub fn new(documents: Vec<Document>, next: Option<PageLocator>) -> Self {
        Page { documents, next }
    }

    /// Create the final page of a listing
    pub fn last(documents: Vec<Document>) -> Self {
        Page {
            documents,
            next: None,
        }
    }
}

/// Paginated document provider
///
/// Thread safety: a source may be shared across concurrent searches, so
/// implementations must be Send + Sync and must not keep per-search state.
pub trait ContentSource: Send + Sync {
    /// Locator of the first page (page 1, page size capped at
    /// [`MAX_PAGE_SIZE`](crate::limits::MAX_PAGE_SIZE))
    fn first_page(&self) -> PageLocator;

    /// Fetch one page
    ///
    /// # Errors
    ///
    /// Returns `UpstreamUnavailable` if the page cannot be retrieved or
    /// decoded.
    fn list_documents(&self, locator: &PageLocator) -> Result<Page>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}
