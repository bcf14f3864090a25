//! Ranking: filter, sort and truncate scored candidates
//!
//! The ranker scores every document in the corpus, keeps only those that
//! matched every term, sorts by score descending and takes the top
//! [`MAX_RESULTS`]. The sort is stable, so documents with equal scores keep
//! the order in which they were loaded.

use crate::query::Query;
use crate::scorer::{ScoredCandidate, Scorer};
use helpdesk_core::{Document, MAX_RESULTS};

/// Output of one ranking pass
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Top candidates, best first, at most `MAX_RESULTS`
    pub candidates: Vec<ScoredCandidate<'a>>,
    /// Number of documents that matched before truncation
    pub total_matched: usize,
}

impl Ranking<'_> {
    /// True if matches were discarded by the top-K cut
    pub fn truncated(&self) -> bool {
        self.total_matched > self.candidates.len()
    }
}

/// Top-K ranker
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    /// Create a new Ranker
    pub fn new() -> Self {
        Ranker
    }

    /// Score, filter, sort and truncate
    pub fn rank<'a>(
        &self,
        documents: &'a [Document],
        query: &Query,
        scorer: &dyn Scorer,
    ) -> Ranking<'a> {
        let mut matched: Vec<ScoredCandidate<'a>> = documents
            .iter()
            .map(|doc| scorer.score(doc, query))
            .filter(|candidate| candidate.matched)
            .collect();

        let total_matched = matched.len();

        // Vec::sort_by is stable: equal scores keep corpus order
        matched.sort_by(|a, b| b.score.cmp(&a.score));
        matched.truncate(MAX_RESULTS);

        Ranking {
            candidates: matched,
            total_matched,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
