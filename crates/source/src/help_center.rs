//! Help Center articles listing over HTTP
//!
//! Lists articles through the Help Center REST API:
//!
//! ```text
//! GET {base_url}/api/v2/help_center[/{locale}]/articles.json?page=1&per_page={n}
//! ```
//!
//! The first locator is that URL; later locators are the absolute
//! `next_page` URLs returned by the upstream.

use crate::auth::token_authorization;
use crate::client::HttpClient;
use crate::wire::ArticlesPage;
use helpdesk_core::limits::FIRST_PAGE;
use helpdesk_core::{ContentSource, Error, Page, PageLocator, Result, SourceConfig};
use std::time::Duration;

/// Content source backed by a Help Center instance
#[derive(Debug)]
pub struct HelpCenterSource {
    client: HttpClient,
    first_page_url: String,
}

impl HelpCenterSource {
    /// Create a source from validated configuration
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration is invalid.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        config.validate()?;
        let authorization = config
            .credentials()
            .map(|(email, token)| token_authorization(email, token));
        let client = HttpClient::new(Duration::from_millis(config.timeout_ms), authorization);
        Ok(HelpCenterSource {
            client,
            first_page_url: articles_url(config),
        })
    }

    /// URL of the first articles page
    pub fn first_page_url(&self) -> &str {
        &self.first_page_url
    }
}

/// Build the first-page articles URL for a configuration
pub fn articles_url(config: &SourceConfig) -> String {
    let base = config.base_url.trim().trim_end_matches('/');
    let scope = match config.locale.as_deref().map(str::trim) {
        Some(locale) if !locale.is_empty() => format!("help_center/{}", locale),
        _ => "help_center".to_string(),
    };
    format!(
        "{}/api/v2/{}/articles.json?page={}&per_page={}",
        base,
        scope,
        FIRST_PAGE,
        config.effective_page_size()
    )
}

/// Parse one articles page
///
/// # Errors
///
/// Returns `UpstreamUnavailable` if the body is not a valid listing. The
/// body itself is not included in the error.
pub fn parse_articles_page(text: &str) -> Result<Page> {
    let page: ArticlesPage = serde_json::from_str(text)
        .map_err(|e| Error::upstream(format!("invalid articles page: {}", e)))?;
    Ok(page.into())
}

impl ContentSource for HelpCenterSource {
    fn first_page(&self) -> PageLocator {
        PageLocator::new(self.first_page_url.clone())
    }

    fn list_documents(&self, locator: &PageLocator) -> Result<Page> {
        tracing::debug!(
            target: "helpdesk::source",
            url = locator.as_str(),
            "Requesting articles page"
        );
        let text = self.client.get_text(locator.as_str())?;
        parse_articles_page(&text)
    }

    fn name(&self) -> &str {
        "help-center"
    }
}
