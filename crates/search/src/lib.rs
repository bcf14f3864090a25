//! Search engine for help-center articles
//!
//! This crate provides:
//! - Query tokenizer and parsed queries with escaped word patterns
//! - Scorer trait and the AllTermsScorer default implementation
//! - Ranker: all-terms filter, stable score sort, top-K cut
//! - Result projection to the public response shape
//! - CorpusLoader: sequential pagination over a ContentSource
//! - SearchEngine: per-request orchestration
//!
//! # Usage
//!
//! ```ignore
//! use helpdesk_search::SearchEngine;
//!
//! let engine = SearchEngine::new(Arc::new(source));
//! let response = engine.search("password reset")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod loader;
pub mod projector;
pub mod query;
pub mod ranker;
pub mod scorer;
pub mod tokenizer;

// Re-export commonly used types
pub use engine::{SearchEngine, SearchOutcome};
pub use loader::{Corpus, CorpusLoader};
pub use projector::{project, project_document};
pub use query::{Query, QueryTerm};
pub use ranker::{Ranker, Ranking};
pub use scorer::{
    AllTermsScorer, ScoredCandidate, Scorer, BODY_HIT_SCORE, TITLE_HIT_SCORE, TITLE_WORD_BONUS,
};
pub use tokenizer::tokenize;
