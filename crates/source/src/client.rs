//! Shared HTTP client for upstream listings
//!
//! Wraps a ureq agent with a global timeout and an optional Authorization
//! header, and maps every transport failure to `UpstreamUnavailable`.
//! Upstream error bodies are dropped; only the status survives.

use helpdesk_core::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Largest response body accepted for one page
const MAX_PAGE_BYTES: u64 = 64 * 1024 * 1024;

/// Blocking JSON-over-HTTP client
pub struct HttpClient {
    agent: ureq::Agent,
    authorization: Option<String>,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client with a global per-request timeout
    pub fn new(timeout: Duration, authorization: Option<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent = ureq::Agent::new_with_config(config);
        HttpClient {
            agent,
            authorization,
            timeout,
        }
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True if requests carry an Authorization header
    pub fn is_authenticated(&self) -> bool {
        self.authorization.is_some()
    }

    /// GET a URL and return the response body as text
    ///
    /// # Errors
    ///
    /// Returns `UpstreamUnavailable` on non-2xx status, timeout, transport
    /// failure or an unreadable body.
    pub fn get_text(&self, url: &str) -> Result<String> {
        let mut request = self.agent.get(url).header("Accept", "application/json");

        if let Some(auth) = &self.authorization {
            request = request.header("Authorization", auth.as_str());
        }

        let mut response = request.call().map_err(map_transport_error)?;

        response
            .body_mut()
            .with_config()
            .limit(MAX_PAGE_BYTES)
            .read_to_string()
            .map_err(|e| Error::upstream(format!("failed to read response: {}", e)))
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credentials
        f.debug_struct("HttpClient")
            .field("authenticated", &self.is_authenticated())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn map_transport_error(e: ureq::Error) -> Error {
    match e {
        ureq::Error::StatusCode(status) => {
            Error::upstream_status(status, "page request returned a non-success status")
        }
        ureq::Error::Timeout(_) => Error::upstream("page request timed out"),
        other => Error::upstream(format!("page request failed: {}", other)),
    }
}
