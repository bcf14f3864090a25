//! Core types and traits for helpdesk search
//!
//! This crate defines the foundational types used throughout the system:
//! - Document, DocumentId: articles as loaded from a content source
//! - RankedResult, SearchResponse, SearchStats: search output
//! - ContentSource, Page, PageLocator: paginated document provider
//! - Error: error taxonomy and the structured error body
//! - HelpdeskConfig: `helpdesk.toml` configuration
//! - limits: fixed contract constants (K, page size)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod limits;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use config::{HelpdeskConfig, SourceConfig, CONFIG_FILE_NAME};
pub use error::{Error, ErrorBody, Result};
pub use limits::{MAX_PAGE_SIZE, MAX_RESULTS};
pub use traits::{ContentSource, Page, PageLocator};
pub use types::{Document, DocumentId, RankedResult, SearchResponse, SearchStats};
