//! helpdesk - relevance search over help-center articles
//!
//! The upstream help center offers no usable search endpoint, so every
//! search pages through the full article listing, scores each article
//! against every query word and returns the ten best matches.
//!
//! # Quick Start
//!
//! ```ignore
//! use helpdesk::{HelpdeskConfig, HelpCenterSource, SearchEngine};
//! use std::sync::Arc;
//!
//! let config = HelpdeskConfig::from_file("helpdesk.toml".as_ref())?;
//! let source = HelpCenterSource::new(&config.source)?;
//! let engine = SearchEngine::new(Arc::new(source));
//!
//! let response = engine.search("password reset")?;
//! for result in &response.results {
//!     println!("{} {}", result.title, result.url);
//! }
//! ```
//!
//! # Architecture
//!
//! - `helpdesk-core`: data model, errors, the ContentSource trait, config
//! - `helpdesk-search`: tokenizer, scorer, ranker, loader, engine
//! - `helpdesk-source`: Help Center HTTP source and in-memory source

pub use helpdesk_core::*;
pub use helpdesk_search::{
    AllTermsScorer, Corpus, CorpusLoader, Query, Ranker, Scorer, SearchEngine, SearchOutcome,
};
pub use helpdesk_source::{HelpCenterSource, MemorySource};
