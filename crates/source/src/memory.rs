//! In-memory content source
//!
//! Serves a fixed list of documents in pages of `page_size`, with page
//! numbers as locators. Backs offline search over an exported corpus file.

use crate::wire::{ArticleRecord, ArticlesPage};
use helpdesk_core::limits::{clamp_page_size, FIRST_PAGE, MAX_PAGE_SIZE};
use helpdesk_core::{ContentSource, Document, Error, Page, PageLocator, Result};
use serde::Deserialize;
use std::path::Path;

/// Accepted layouts of a corpus file
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Records(Vec<ArticleRecord>),
    Listing(ArticlesPage),
}

/// Paged view over an owned document list
#[derive(Debug, Clone)]
pub struct MemorySource {
    documents: Vec<Document>,
    page_size: usize,
}

impl MemorySource {
    /// Create a source serving `documents` in pages of 100
    pub fn new(documents: Vec<Document>) -> Self {
        MemorySource {
            documents,
            page_size: MAX_PAGE_SIZE,
        }
    }

    /// Builder: set page size (clamped to 1..=100)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    /// Parse a corpus from JSON
    ///
    /// Accepts either an array of article records or an object with an
    /// `articles` array (a saved listing page).
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text is not a recognized corpus layout.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let file: CorpusFile = serde_json::from_str(text)
            .map_err(|e| Error::config(format!("Invalid corpus file: {}", e)))?;
        let records = match file {
            CorpusFile::Records(records) => records,
            CorpusFile::Listing(page) => page.articles,
        };
        Ok(Self::new(records.into_iter().map(Document::from).collect()))
    }

    /// Read a corpus file
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read corpus file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&text)
    }

    /// Number of documents served
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the source holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl ContentSource for MemorySource {
    fn first_page(&self) -> PageLocator {
        PageLocator::new(FIRST_PAGE.to_string())
    }

    fn list_documents(&self, locator: &PageLocator) -> Result<Page> {
        let number: usize = locator
            .as_str()
            .parse()
            .ok()
            .filter(|&n| n >= FIRST_PAGE)
            .ok_or_else(|| Error::upstream(format!("unknown page locator '{}'", locator)))?;

        let start = (number - FIRST_PAGE).saturating_mul(self.page_size);
        if start >= self.documents.len() {
            return Ok(Page::last(Vec::new()));
        }
        let end = (start + self.page_size).min(self.documents.len());
        let next = (end < self.documents.len()).then(|| PageLocator::new((number + 1).to_string()));

        Ok(Page::new(self.documents[start..end].to_vec(), next))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
