//! Parsed search queries
//!
//! A [`Query`] is the validated form of a raw query string: a non-empty
//! sequence of [`QueryTerm`]s. Terms are matched as literal text, so user
//! input is never interpreted as a pattern.
//!
//! Whole-word matching uses ASCII word characters (`[A-Za-z0-9_]`) for the
//! boundary test. A non-ASCII letter next to a hit counts as a boundary.

use crate::tokenizer::tokenize;
use helpdesk_core::{Error, Result};

/// One normalized query token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    text: String,
}

impl QueryTerm {
    /// Wrap an already-normalized token
    pub fn new(token: impl Into<String>) -> Self {
        QueryTerm {
            text: token.into(),
        }
    }

    /// The literal token
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the token occurs anywhere in `haystack`
    pub fn occurs_in(&self, haystack: &str) -> bool {
        haystack.contains(self.text.as_str())
    }

    /// True if some occurrence of the token sits between word boundaries
    ///
    /// Overlapping occurrences are all considered.
    pub fn occurs_as_word_in(&self, haystack: &str) -> bool {
        let token = self.text.as_str();
        let (Some(first), Some(last)) = (token.chars().next(), token.chars().next_back()) else {
            return false;
        };

        let mut from = 0;
        while let Some(offset) = haystack[from..].find(token) {
            let start = from + offset;
            let end = start + token.len();
            let before = haystack[..start].chars().next_back();
            let after = haystack[end..].chars().next();

            if is_word_char(before) != is_word_char(Some(first))
                && is_word_char(Some(last)) != is_word_char(after)
            {
                return true;
            }
            from = start + first.len_utf8();
        }
        false
    }
}

fn is_word_char(c: Option<char>) -> bool {
    matches!(c, Some(c) if c.is_ascii_alphanumeric() || c == '_')
}

/// Validated query: at least one term, in typed order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    terms: Vec<QueryTerm>,
}

impl Query {
    /// Tokenize and compile a raw query string
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if the query yields no tokens.
    pub fn parse(raw: &str) -> Result<Self> {
        let tokens = tokenize(raw);
        if tokens.is_empty() {
            return Err(Error::invalid_query(
                "query must contain at least one non-whitespace word",
            ));
        }
        Ok(Query {
            terms: tokens.into_iter().map(QueryTerm::new).collect(),
        })
    }

    /// Parse the `query` field of a JSON request
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if the value is absent, not a string, or
    /// yields no tokens.
    pub fn from_json(value: Option<&serde_json::Value>) -> Result<Self> {
        match value {
            None | Some(serde_json::Value::Null) => {
                Err(Error::invalid_query("query is required"))
            }
            Some(serde_json::Value::String(raw)) => Self::parse(raw),
            Some(_) => Err(Error::invalid_query("query must be a string")),
        }
    }

    /// Terms in typed order
    pub fn terms(&self) -> &[QueryTerm] {
        &self.terms
    }

    /// Literal tokens in typed order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(QueryTerm::text)
    }

    /// Number of terms (never zero)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the query has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
