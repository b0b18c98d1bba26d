//! Google — general web hits via the Programmable Search JSON API.
//!
//! One call to the Custom Search endpoint. Requires `GOOGLE_API_KEY`
//! and `GOOGLE_CX`; without both the adapter stays quiet. Web items
//! carry no structured signal, so key points are always empty.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::{AggregateError, Result};
use crate::http;
use crate::types::{SearchResult, SourceKind};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Google Custom Search adapter.
pub struct GoogleSource {
    base_url: String,
    api_key: Option<String>,
    cx: Option<String>,
}

impl Default for GoogleSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: std::env::var("GOOGLE_API_KEY").ok(),
            cx: std::env::var("GOOGLE_CX").ok(),
        }
    }
}

impl GoogleSource {
    /// Create an adapter with explicit credentials instead of reading
    /// `GOOGLE_API_KEY` and `GOOGLE_CX` from the environment.
    pub fn new(api_key: impl Into<String>, cx: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: Some(api_key.into()),
            cx: Some(cx.into()),
        }
    }

    /// Override the API base URL. Intended for tests against a local
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SourceAdapter for GoogleSource {
    async fn fetch(&self, query: &str, config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        let (Some(api_key), Some(cx)) = (self.api_key.as_deref(), self.cx.as_deref()) else {
            tracing::debug!("GOOGLE_API_KEY or GOOGLE_CX not set; skipping Google");
            return Ok(vec![]);
        };

        tracing::trace!(query, "Google search");

        let client = http::build_client(config)?;

        let response = client
            .get(format!("{}/customsearch/v1", self.base_url))
            .query(&[("key", api_key), ("cx", cx), ("q", query)])
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("Google request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("Google HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("Google response read failed: {e}")))?;

        parse_search_items(&body)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Google
    }
}

#[derive(Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<CseItem>,
}

#[derive(Deserialize)]
struct CseItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    link: String,
}

/// Map a Custom Search response onto normalised results. A query with
/// no matches has no `items` field at all. Items occasionally arrive
/// without a snippet; those are dropped rather than emitted half-empty.
///
/// Extracted as a separate function for testability with mock JSON.
pub(crate) fn parse_search_items(json: &str) -> Result<Vec<SearchResult>> {
    let response: CseResponse = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("Google search response: {e}")))?;

    Ok(response
        .items
        .into_iter()
        .filter(|item| !item.title.is_empty() && !item.snippet.is_empty())
        .map(|item| SearchResult {
            title: item.title,
            summary: item.snippet,
            key_points: vec![],
            thumbnail: None,
            url: item.link,
            source: SourceKind::Google,
        })
        .collect())
}
