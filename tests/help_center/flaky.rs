//! Source wrapper that starts failing after a number of pages

use helpdesk::{ContentSource, Error, MemorySource, Page, PageLocator, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct FlakySource {
    inner: MemorySource,
    healthy_pages: usize,
    served: AtomicUsize,
}

impl FlakySource {
    pub fn new(inner: MemorySource, healthy_pages: usize) -> Self {
        FlakySource {
            inner,
            healthy_pages,
            served: AtomicUsize::new(0),
        }
    }
}

impl ContentSource for FlakySource {
    fn first_page(&self) -> PageLocator {
        self.inner.first_page()
    }

    fn list_documents(&self, locator: &PageLocator) -> Result<Page> {
        if self.served.fetch_add(1, Ordering::SeqCst) >= self.healthy_pages {
            return Err(Error::upstream_status(503, "service unavailable"));
        }
        self.inner.list_documents(locator)
    }

    fn name(&self) -> &str {
        "flaky"
    }
}
