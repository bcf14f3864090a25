//! Shared test utilities for search integration tests.

#![allow(dead_code)]

use helpdesk_core::{ContentSource, Document, Error, Page, PageLocator, Result};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

// ============================================================================
// PagedSource - in-memory source with failure injection
// ============================================================================

/// Serves documents in fixed-size pages numbered from 1.
pub struct PagedSource {
    documents: Vec<Document>,
    page_size: usize,
    fail_at: Option<usize>,
    calls: AtomicUsize,
}

impl PagedSource {
    pub fn new(documents: Vec<Document>, page_size: usize) -> Self {
        PagedSource {
            documents,
            page_size,
            fail_at: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Make the given page number return an upstream error
    pub fn failing_at(mut self, page: usize) -> Self {
        self.fail_at = Some(page);
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ContentSource for PagedSource {
    fn first_page(&self) -> PageLocator {
        PageLocator::new("1")
    }

    fn list_documents(&self, locator: &PageLocator) -> Result<Page> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let number: usize = locator
            .as_str()
            .parse()
            .map_err(|_| Error::upstream("bad locator"))?;
        if self.fail_at == Some(number) {
            return Err(Error::upstream_status(500, "internal server error"));
        }
        let start = (number - 1) * self.page_size;
        let end = (start + self.page_size).min(self.documents.len());
        let documents = self.documents[start.min(end)..end].to_vec();
        let next = (end < self.documents.len()).then(|| PageLocator::new((number + 1).to_string()));
        Ok(Page::new(documents, next))
    }

    fn name(&self) -> &str {
        "paged-test"
    }
}

// ============================================================================
// Document helpers
// ============================================================================

pub fn doc(id: u64, title: &str, body: &str) -> Document {
    Document::new(id, title)
        .with_body(body)
        .with_url(format!("https://help.example.com/hc/articles/{}", id))
}

/// `n` filler documents whose titles and bodies share no query words used
/// in tests.
pub fn filler(start: u64, n: u64) -> Vec<Document> {
    (start..start + n)
        .map(|i| doc(i, &format!("Filler article {}", i), "lorem ipsum dolor"))
        .collect()
}

// ============================================================================
// Log capture
// ============================================================================

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Run `f` with a WARN-level subscriber writing into this buffer
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(String::from)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
