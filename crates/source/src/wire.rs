//! Upstream article records
//!
//! Help Center listings carry both an API `url` and a public `html_url`;
//! results link to the public one. Exported corpora that only carry `url`
//! are accepted as well.

use helpdesk_core::{Document, DocumentId, Page, PageLocator};
use serde::Deserialize;

/// One article as sent by the upstream
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRecord {
    /// Article id
    pub id: DocumentId,
    /// Title, may be null
    #[serde(default)]
    pub title: Option<String>,
    /// HTML body, may be null
    #[serde(default)]
    pub body: Option<String>,
    /// Public article URL
    #[serde(default)]
    pub html_url: Option<String>,
    /// API or exported URL
    #[serde(default)]
    pub url: Option<String>,
}

impl From<ArticleRecord> for Document {
    fn from(record: ArticleRecord) -> Self {
        Document {
            id: record.id,
            title: record.title.unwrap_or_default(),
            body: record.body,
            url: record.html_url.or(record.url).unwrap_or_default(),
        }
    }
}

/// One page of an articles listing
#[derive(Debug, Clone, Deserialize)]
pub struct ArticlesPage {
    /// Articles in upstream order
    #[serde(default)]
    pub articles: Vec<ArticleRecord>,
    /// Absolute URL of the next page, null on the last page
    #[serde(default)]
    pub next_page: Option<String>,
}

impl From<ArticlesPage> for Page {
    fn from(page: ArticlesPage) -> Self {
        let next = page
            .next_page
            .filter(|url| !url.trim().is_empty())
            .map(PageLocator::new);
        Page::new(page.articles.into_iter().map(Document::from).collect(), next)
    }
}
