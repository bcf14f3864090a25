//! Fixed limits of the search engine
//!
//! These values are part of the search contract and are not configurable.

/// Maximum number of results a search returns (K)
pub const MAX_RESULTS: usize = 10;

/// Maximum number of documents requested per upstream page
pub const MAX_PAGE_SIZE: usize = 100;

/// Number of the first page of every listing
pub const FIRST_PAGE: usize = 1;

/// Clamp a requested page size into `1..=MAX_PAGE_SIZE`
pub fn clamp_page_size(requested: usize) -> usize {
    requested.clamp(1, MAX_PAGE_SIZE)
}
