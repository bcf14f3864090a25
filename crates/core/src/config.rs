//! Configuration via `helpdesk.toml`
//!
//! The configuration is read once at process start and passed by reference
//! to the content source. Nothing in the search path reads ambient state.

use crate::error::{Error, Result};
use crate::limits::{clamp_page_size, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name looked up by default.
pub const CONFIG_FILE_NAME: &str = "helpdesk.toml";

/// Connection settings for the Help Center content source.
///
/// Persisted in `helpdesk.toml` under the `[source]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// Help Center base URL (e.g. "https://example.zendesk.com")
    pub base_url: String,
    /// Optional locale segment (e.g. "en-us")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Agent email used for token authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// API token used for token authentication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Documents per page, clamped to 1..=100 (default: 100)
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Per-request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Stop pagination after this many pages (default: unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<usize>,
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl SourceConfig {
    /// Create a source config with defaults for everything but the URL
    pub fn new(base_url: impl Into<String>) -> Self {
        SourceConfig {
            base_url: base_url.into(),
            locale: None,
            email: None,
            api_token: None,
            page_size: default_page_size(),
            timeout_ms: default_timeout_ms(),
            max_pages: None,
        }
    }

    /// Page size actually requested from the upstream
    pub fn effective_page_size(&self) -> usize {
        clamp_page_size(self.page_size)
    }

    /// Email and token, when both are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.email.as_deref(), self.api_token.as_deref()) {
            (Some(email), Some(token)) if !email.is_empty() && !token.is_empty() => {
                Some((email, token))
            }
            _ => None,
        }
    }

    /// Validate the settings
    ///
    /// # Errors
    ///
    /// Returns `Config` if the base URL is not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config(format!(
                "Invalid base_url '{}' in {}. Expected an http:// or https:// URL.",
                self.base_url, CONFIG_FILE_NAME
            )));
        }
        Ok(())
    }
}

/// Process configuration loaded from `helpdesk.toml`.
///
/// # Example
///
/// ```toml
/// [source]
/// base_url = "https://example.zendesk.com"
/// locale = "en-us"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HelpdeskConfig {
    /// Content source settings
    pub source: SourceConfig,
}

impl HelpdeskConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# helpdesk configuration

[source]
# Help Center base URL
base_url = "https://example.zendesk.com"

# Locale segment of the articles listing (optional)
# locale = "en-us"

# Token authentication: sent as Basic "{email}/token:{api_token}" (optional)
# email = "agent@example.com"
# api_token = "your-api-token"

# Documents per page, 1..=100 (default 100)
page_size = 100

# Per-request timeout in milliseconds (default 10000)
timeout_ms = 10000

# Stop pagination after this many pages (optional, default unlimited)
# max_pages = 50
"#
    }

    /// Parse and validate config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the text cannot be parsed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HelpdeskConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
        config.source.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{} ({})", msg, path.display())),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` if the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            Error::config(format!(
                "Failed to write default config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(true)
    }
}
