//! Scoring infrastructure for help-center search
//!
//! This module provides:
//! - ScoredCandidate: a document with its score and match verdict
//! - Scorer trait for pluggable scoring algorithms
//! - AllTermsScorer: the default title/body keyword scorer
//!
//! # Scoring Rules
//!
//! For each query term, in order:
//!
//! | Condition                               | Points |
//! |-----------------------------------------|--------|
//! | term is a substring of the title        | +10    |
//! | term is a substring of the body         | +1     |
//! | term is a whole word in the title       | +5     |
//!
//! A term that hits neither title nor body rejects the document and stops
//! evaluation. Matching is case-insensitive.

use crate::query::Query;
use helpdesk_core::Document;

/// Points for a term found in the title
pub const TITLE_HIT_SCORE: u32 = 10;

/// Points for a term found in the body
pub const BODY_HIT_SCORE: u32 = 1;

/// Extra points for a term found as a whole word in the title
pub const TITLE_WORD_BONUS: u32 = 5;

// ============================================================================
// ScoredCandidate
// ============================================================================

/// A document evaluated against a query
///
/// Transient: created and discarded within one ranking pass.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    /// Document being scored
    pub document: &'a Document,
    /// Accumulated score (0 for rejected documents)
    pub score: u32,
    /// True if every term hit the title or the body
    pub matched: bool,
}

impl<'a> ScoredCandidate<'a> {
    /// A rejected candidate
    pub fn rejected(document: &'a Document) -> Self {
        ScoredCandidate {
            document,
            score: 0,
            matched: false,
        }
    }

    /// A matching candidate with its final score
    pub fn matched(document: &'a Document, score: u32) -> Self {
        ScoredCandidate {
            document,
            score,
            matched: true,
        }
    }
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers take a document and a parsed query and return a scored
/// candidate. Higher scores indicate more relevant documents.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync; one engine may serve concurrent searches.
pub trait Scorer: Send + Sync {
    /// Score a document against a query
    fn score<'a>(&self, doc: &'a Document, query: &Query) -> ScoredCandidate<'a>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// AllTermsScorer
// ============================================================================

/// Keyword scorer requiring every term to appear in the title or body
#[derive(Debug, Clone, Copy, Default)]
pub struct AllTermsScorer;

impl AllTermsScorer {
    /// Create a new AllTermsScorer
    pub fn new() -> Self {
        AllTermsScorer
    }
}

impl Scorer for AllTermsScorer {
    fn score<'a>(&self, doc: &'a Document, query: &Query) -> ScoredCandidate<'a> {
        let title = doc.title.to_lowercase();
        let body = doc.body_text().to_lowercase();

        let mut score: u32 = 0;
        for term in query.terms() {
            let title_hit = term.occurs_in(&title);
            let body_hit = term.occurs_in(&body);

            if !title_hit && !body_hit {
                return ScoredCandidate::rejected(doc);
            }

            if title_hit {
                score = score.saturating_add(TITLE_HIT_SCORE);
            }
            if body_hit {
                score = score.saturating_add(BODY_HIT_SCORE);
            }
            // A whole-word hit is always also a substring hit
            if title_hit && term.occurs_as_word_in(&title) {
                score = score.saturating_add(TITLE_WORD_BONUS);
            }
        }

        ScoredCandidate::matched(doc, score)
    }

    fn name(&self) -> &str {
        "all-terms"
    }
}

// ============================================================================
// Tests
// ============================================================================
