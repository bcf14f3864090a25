//! Error types for helpdesk search
//!
//! This module defines the error taxonomy shared by every crate in the
//! workspace. We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! | Variant               | Caused by | Status class | Surfaced by `search` |
//! |-----------------------|-----------|--------------|----------------------|
//! | `InvalidQuery`        | client    | 400          | yes                  |
//! | `UpstreamUnavailable` | upstream  | 502          | no (corpus truncated)|
//! | `Internal`            | engine    | 500          | yes                  |
//! | `Config`              | operator  | 500          | n/a (startup)        |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for helpdesk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for helpdesk search
#[derive(Debug, Error)]
pub enum Error {
    /// The query was absent, not a string, or contained no tokens
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A content source page could not be retrieved or decoded
    #[error("Upstream unavailable{}: {message}", status_suffix(.status))]
    UpstreamUnavailable {
        /// HTTP status returned by the upstream, if any
        status: Option<u16>,
        /// Transport or decoding failure description
        message: String,
    },

    /// Unexpected failure while scoring or ranking
    #[error("Internal failure: {0}")]
    Internal(String),

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an InvalidQuery error
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Error::InvalidQuery(message.into())
    }

    /// Create an UpstreamUnavailable error carrying an HTTP status
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Error::UpstreamUnavailable {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create an UpstreamUnavailable error without a status (transport, decode)
    pub fn upstream(message: impl Into<String>) -> Self {
        Error::UpstreamUnavailable {
            status: None,
            message: message.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidQuery(_) => "invalid_query",
            Error::UpstreamUnavailable { .. } => "upstream_unavailable",
            Error::Internal(_) => "internal_failure",
            Error::Config(_) => "config_error",
        }
    }

    /// HTTP-equivalent status class a caller should report
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidQuery(_) => 400,
            Error::UpstreamUnavailable { .. } => 502,
            Error::Internal(_) | Error::Config(_) => 500,
        }
    }

    /// True if the caller caused the error and retrying cannot help
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidQuery(_))
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}

// ============================================================================
// ErrorBody
// ============================================================================

/// Structured error object handed to callers
///
/// Upstream error bodies and internal details other than the error's own
/// message are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (see [`Error::code`])
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl From<&Error> for ErrorBody {
    fn from(err: &Error) -> Self {
        let message = match err {
            Error::InvalidQuery(msg) => msg.clone(),
            Error::UpstreamUnavailable { .. } => "help center is unavailable".to_string(),
            Error::Internal(_) => "search failed".to_string(),
            Error::Config(msg) => msg.clone(),
        };
        ErrorBody {
            error: err.code().to_string(),
            message,
        }
    }
}
