//! Search orchestrator
//!
//! ```text
//!   raw query                 ContentSource
//!       │                          │
//!       ▼                          ▼
//!  ┌──────────┐            ┌──────────────┐
//!  │  Query   │            │ CorpusLoader │
//!  │  parse   │            │  (pages...)  │
//!  └────┬─────┘            └──────┬───────┘
//!       │   terms                 │ documents
//!       └───────────┬─────────────┘
//!                   ▼
//!          ┌─────────────────┐
//!          │ Ranker + Scorer │
//!          └────────┬────────┘
//!                   ▼
//!          ┌─────────────────┐
//!          │    Projector    │
//!          └────────┬────────┘
//!                   ▼
//!            SearchResponse
//! ```
//!
//! SearchEngine is STATELESS between calls. It holds only shared references
//! to the source and scorer; each search loads its own corpus.

use crate::loader::CorpusLoader;
use crate::projector::project;
use crate::query::Query;
use crate::ranker::Ranker;
use crate::scorer::{AllTermsScorer, Scorer};
use helpdesk_core::{ContentSource, Error, Result, SearchResponse, SearchStats};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// Response plus the statistics gathered while producing it
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// What the caller receives
    pub response: SearchResponse,
    /// What gets logged
    pub stats: SearchStats,
}

/// Help-center search engine
#[derive(Clone)]
pub struct SearchEngine {
    source: Arc<dyn ContentSource>,
    scorer: Arc<dyn Scorer>,
    ranker: Ranker,
    max_pages: Option<usize>,
}

impl SearchEngine {
    /// Create an engine over a content source
    ///
    /// Uses AllTermsScorer by default.
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        SearchEngine {
            source,
            scorer: Arc::new(AllTermsScorer::new()),
            ranker: Ranker::new(),
            max_pages: None,
        }
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Builder: cap the number of pages loaded per search
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Search the help center
    ///
    /// # Errors
    ///
    /// - `InvalidQuery` if the query has no tokens
    /// - `Internal` if scoring fails unexpectedly
    ///
    /// Upstream failures never surface here; the corpus is truncated
    /// instead.
    pub fn search(&self, query: &str) -> Result<SearchResponse> {
        self.execute(query).map(|outcome| outcome.response)
    }

    /// Search using the `query` field of a JSON request body
    ///
    /// # Errors
    ///
    /// As [`search`](Self::search), plus `InvalidQuery` when the value is
    /// absent or not a string.
    pub fn search_json(&self, query: Option<&serde_json::Value>) -> Result<SearchResponse> {
        let query = Query::from_json(query)?;
        self.run(&query).map(|outcome| outcome.response)
    }

    /// Search and return the execution statistics alongside the response
    pub fn execute(&self, query: &str) -> Result<SearchOutcome> {
        // Validate before touching the upstream
        let query = Query::parse(query)?;
        self.run(&query)
    }

    fn run(&self, query: &Query) -> Result<SearchOutcome> {
        let start = Instant::now();

        let corpus = CorpusLoader::new(self.source.as_ref())
            .with_max_pages(self.max_pages)
            .load();

        let ranker = self.ranker;
        let scorer = self.scorer.as_ref();
        let documents = &corpus.documents;
        let (results, total_matched) = catch_unwind(AssertUnwindSafe(|| {
            let ranking = ranker.rank(documents, query, scorer);
            (project(&ranking.candidates), ranking.total_matched)
        }))
        .map_err(|_| {
            tracing::error!(
                target: "helpdesk::engine",
                scorer = scorer.name(),
                "Scoring panicked, discarding results"
            );
            Error::internal("scoring failed")
        })?;

        let stats = SearchStats {
            pages_fetched: corpus.pages_fetched,
            corpus_size: corpus.len(),
            candidates_matched: total_matched,
            degraded: corpus.degraded,
            elapsed_micros: start.elapsed().as_micros() as u64,
        };

        tracing::info!(
            target: "helpdesk::engine",
            source = self.source.name(),
            scorer = scorer.name(),
            terms = query.len(),
            pages = stats.pages_fetched,
            corpus = stats.corpus_size,
            matched = stats.candidates_matched,
            returned = results.len(),
            degraded = stats.degraded,
            elapsed_us = stats.elapsed_micros,
            "Search complete"
        );

        Ok(SearchOutcome {
            response: SearchResponse::new(results),
            stats,
        })
    }
}
