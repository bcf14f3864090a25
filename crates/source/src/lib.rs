//! Content sources for helpdesk search
//!
//! - HelpCenterSource: Help Center articles listing over HTTP (ureq)
//! - MemorySource: paged view over an in-memory or file-backed corpus
//! - token_authorization: Basic header for API token authentication

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod client;
pub mod help_center;
pub mod memory;
pub mod wire;

pub use auth::token_authorization;
pub use client::HttpClient;
pub use help_center::{articles_url, parse_articles_page, HelpCenterSource};
pub use memory::MemorySource;
pub use wire::{ArticleRecord, ArticlesPage};
