//! Query tokenizer
//!
//! Lowercases, splits on runs of whitespace and drops empty segments.
//! No stemming, stopwords or punctuation handling: `"c++"` stays `"c++"`.

/// Tokenize a query into lowercase, non-empty terms
///
/// Order is left-to-right as typed. Duplicates are kept.
///
/// # Example
///
/// ```
/// use helpdesk_search::tokenizer::tokenize;
///
/// let tokens = tokenize("  Reset   your PASSWORD ");
/// assert_eq!(tokens, vec!["reset", "your", "password"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}
