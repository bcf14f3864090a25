//! SearchResponse → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): numbered list of titles with their URLs
//! - **JSON** (`--json`): `{ "results": [...], "count": n }`
//! - **Raw** (`--raw`): one result URL per line, or the id if it has none

use helpdesk_core::{Error, ErrorBody, SearchResponse};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a search response.
pub fn format_response(response: &SearchResponse, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(response)
            .unwrap_or_else(|_| "{\"results\": [], \"count\": 0}".to_string()),
        OutputMode::Raw => response
            .results
            .iter()
            .map(|r| {
                if r.url.is_empty() {
                    r.id.to_string()
                } else {
                    r.url.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => format_human(response),
    }
}

fn format_human(response: &SearchResponse) -> String {
    if response.is_empty() {
        return "(no results)".to_string();
    }
    response
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if r.url.is_empty() {
                format!("{}) {} [{}]", i + 1, r.title, r.id)
            } else {
                format!("{}) {} [{}]\n   {}", i + 1, r.title, r.id, r.url)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an error as the structured error object (JSON) or a one-liner.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    let body = ErrorBody::from(err);
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&body)
            .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", body.error)),
        OutputMode::Raw => body.message,
        OutputMode::Human => format!("(error) {}", body.message),
    }
}
