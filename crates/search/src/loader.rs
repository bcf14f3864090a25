//! Corpus loader
//!
//! Walks a [`ContentSource`] from its first page, following each page's
//! `next` locator, and concatenates the documents in arrival order.
//!
//! # Halting
//!
//! | Condition                         | Result                     | Log    |
//! |-----------------------------------|----------------------------|--------|
//! | `next` is absent                  | complete corpus            | debug  |
//! | page is empty                     | complete corpus            | debug  |
//! | page request fails                | partial corpus, `degraded` | warn   |
//! | `next` repeats the current page   | corpus so far              | warn   |
//! | `max_pages` reached               | corpus so far              | warn   |
//!
//! A failed page never fails the search: ranking proceeds on whatever was
//! accumulated.

use helpdesk_core::{ContentSource, Document, PageLocator};

/// Documents loaded for one search
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Documents in page arrival order, then in-page order
    pub documents: Vec<Document>,
    /// Pages successfully retrieved
    pub pages_fetched: usize,
    /// True if a page request failed and pagination stopped early
    pub degraded: bool,
}

impl Corpus {
    /// Number of loaded documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no documents were loaded
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Sequential paginating loader
///
/// Holds only a reference to the source; every call to [`load`](Self::load)
/// builds a fresh corpus.
pub struct CorpusLoader<'s> {
    source: &'s dyn ContentSource,
    max_pages: Option<usize>,
}

impl<'s> CorpusLoader<'s> {
    /// Create a loader over a content source
    pub fn new(source: &'s dyn ContentSource) -> Self {
        CorpusLoader {
            source,
            max_pages: None,
        }
    }

    /// Builder: stop after `max_pages` pages (`None` or 0 = unlimited)
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages.filter(|&n| n > 0);
        self
    }

    /// Fetch every page and return the accumulated corpus
    pub fn load(&self) -> Corpus {
        let mut corpus = Corpus::default();
        let mut locator: PageLocator = self.source.first_page();

        loop {
            if let Some(max) = self.max_pages {
                if corpus.pages_fetched >= max {
                    tracing::warn!(
                        target: "helpdesk::loader",
                        source = self.source.name(),
                        max_pages = max,
                        documents = corpus.documents.len(),
                        "Page limit reached, stopping pagination"
                    );
                    break;
                }
            }

            let page = match self.source.list_documents(&locator) {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        target: "helpdesk::loader",
                        source = self.source.name(),
                        page = %locator,
                        pages_fetched = corpus.pages_fetched,
                        documents = corpus.documents.len(),
                        error = %e,
                        "Page fetch failed, continuing with partial corpus"
                    );
                    corpus.degraded = true;
                    break;
                }
            };

            corpus.pages_fetched += 1;

            if page.documents.is_empty() {
                tracing::debug!(
                    target: "helpdesk::loader",
                    source = self.source.name(),
                    page = %locator,
                    "Empty page, stopping pagination"
                );
                break;
            }

            tracing::debug!(
                target: "helpdesk::loader",
                source = self.source.name(),
                page = %locator,
                count = page.documents.len(),
                "Fetched page"
            );
            corpus.documents.extend(page.documents);

            match page.next {
                None => break,
                Some(next) if next == locator => {
                    tracing::warn!(
                        target: "helpdesk::loader",
                        source = self.source.name(),
                        page = %locator,
                        "Next page repeats the current page, stopping pagination"
                    );
                    break;
                }
                Some(next) => locator = next,
            }
        }

        corpus
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::{Error, Page, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves pages by number; `fail_at` makes that page return an error
    struct NumberedSource {
        sizes: Vec<usize>,
        fail_at: Option<usize>,
        repeat_last: bool,
        calls: AtomicUsize,
    }

    impl NumberedSource {
        fn new(sizes: &[usize]) -> Self {
            NumberedSource {
                sizes: sizes.to_vec(),
                fail_at: None,
                repeat_last: false,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ContentSource for NumberedSource {
        fn first_page(&self) -> PageLocator {
            PageLocator::new("1")
        }

        fn list_documents(&self, locator: &PageLocator) -> Result<Page> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let n: usize = locator.as_str().parse().unwrap();
            if self.fail_at == Some(n) {
                return Err(Error::upstream_status(503, "service unavailable"));
            }
            let offset: usize = self.sizes[..n - 1].iter().sum();
            let documents = (0..self.sizes[n - 1])
                .map(|i| Document::new((offset + i) as u64, format!("doc {}", offset + i)))
                .collect();
            let next = if n < self.sizes.len() {
                Some(PageLocator::new((n + 1).to_string()))
            } else if self.repeat_last {
                Some(locator.clone())
            } else {
                None
            };
            Ok(Page::new(documents, next))
        }

        fn name(&self) -> &str {
            "numbered"
        }
    }

    #[test]
    fn test_load_concatenates_pages() {
        let source = NumberedSource::new(&[100, 100, 7]);
        let corpus = CorpusLoader::new(&source).load();
        assert_eq!(corpus.len(), 207);
        assert_eq!(corpus.pages_fetched, 3);
        assert!(!corpus.degraded);
    }

    #[test]
    fn test_load_preserves_arrival_order() {
        let source = NumberedSource::new(&[3, 2]);
        let corpus = CorpusLoader::new(&source).load();
        let titles: Vec<_> = corpus.documents.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["doc 0", "doc 1", "doc 2", "doc 3", "doc 4"]);
    }

    #[test]
    fn test_failure_returns_partial_corpus() {
        let mut source = NumberedSource::new(&[100, 100, 100]);
        source.fail_at = Some(3);
        let corpus = CorpusLoader::new(&source).load();
        assert_eq!(corpus.len(), 200);
        assert_eq!(corpus.pages_fetched, 2);
        assert!(corpus.degraded);
    }

    #[test]
    fn test_failure_on_first_page_yields_empty_corpus() {
        let mut source = NumberedSource::new(&[10]);
        source.fail_at = Some(1);
        let corpus = CorpusLoader::new(&source).load();
        assert!(corpus.is_empty());
        assert!(corpus.degraded);
    }

    #[test]
    fn test_empty_page_halts_pagination() {
        let source = NumberedSource::new(&[5, 0, 5]);
        let corpus = CorpusLoader::new(&source).load();
        assert_eq!(corpus.len(), 5);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert!(!corpus.degraded);
    }

    #[test]
    fn test_repeated_locator_halts_pagination() {
        let mut source = NumberedSource::new(&[4, 4]);
        source.repeat_last = true;
        let corpus = CorpusLoader::new(&source).load();
        assert_eq!(corpus.len(), 8);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_max_pages_caps_pagination() {
        let source = NumberedSource::new(&[10, 10, 10, 10]);
        let corpus = CorpusLoader::new(&source).with_max_pages(Some(2)).load();
        assert_eq!(corpus.len(), 20);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert!(!corpus.degraded);
    }

    #[test]
    fn test_zero_max_pages_is_unlimited() {
        let source = NumberedSource::new(&[1, 1, 1]);
        let corpus = CorpusLoader::new(&source).with_max_pages(Some(0)).load();
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_each_load_is_fresh() {
        let source = NumberedSource::new(&[2]);
        let loader = CorpusLoader::new(&source);
        assert_eq!(loader.load().len(), 2);
        assert_eq!(loader.load().len(), 2);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }
}
