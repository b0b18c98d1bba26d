//! Wikipedia — encyclopaedic summaries via the MediaWiki and REST APIs.
//!
//! Two calls per query: a full-text search through `/w/api.php` to find
//! the best-matching article, then the RESTBase page summary for that
//! article. Emits at most one result.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::{AggregateError, Result};
use crate::http;
use crate::types::{SearchResult, SourceKind};
use serde::Deserialize;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Wikipedia search adapter.
///
/// The highest-authority narrative source: when it contributes a
/// result, its extract seeds the unified answer.
pub struct WikipediaSource {
    base_url: String,
}

impl Default for WikipediaSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl WikipediaSource {
    /// Override the API base URL. Intended for tests against a local
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the RESTBase summary URL for an article title. The title
    /// goes into a path segment, so it is percent-encoded here.
    fn summary_url(&self, title: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AggregateError::Parse(format!("invalid Wikipedia base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| AggregateError::Parse("Wikipedia base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(["api", "rest_v1", "page", "summary", title]);
        Ok(url)
    }
}

impl SourceAdapter for WikipediaSource {
    async fn fetch(&self, query: &str, config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        tracing::trace!(query, "Wikipedia search");

        let client = http::build_client(config)?;

        let response = client
            .get(format!("{}/w/api.php", self.base_url))
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("Wikipedia search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("Wikipedia search HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("Wikipedia response read failed: {e}")))?;

        let Some(title) = parse_top_search_title(&body)? else {
            tracing::debug!(query, "Wikipedia search matched no articles");
            return Ok(vec![]);
        };

        let response = client
            .get(self.summary_url(&title)?)
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("Wikipedia summary request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("Wikipedia summary HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("Wikipedia response read failed: {e}")))?;

        parse_page_summary(&body).map(|result| vec![result])
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Wikipedia
    }
}

#[derive(Deserialize)]
struct MwSearchResponse {
    query: MwSearchQuery,
}

#[derive(Deserialize)]
struct MwSearchQuery {
    search: Vec<MwSearchPage>,
}

#[derive(Deserialize)]
struct MwSearchPage {
    title: String,
}

#[derive(Deserialize)]
struct PageSummary {
    title: String,
    extract: String,
    #[serde(default)]
    thumbnail: Option<PageThumbnail>,
    content_urls: ContentUrls,
}

#[derive(Deserialize)]
struct PageThumbnail {
    source: String,
}

#[derive(Deserialize)]
struct ContentUrls {
    desktop: DesktopUrls,
}

#[derive(Deserialize)]
struct DesktopUrls {
    page: String,
}

/// Pull the title of the top hit out of a MediaWiki search response.
/// Returns `None` when the search matched nothing.
///
/// Extracted as a separate function for testability with mock JSON.
pub(crate) fn parse_top_search_title(json: &str) -> Result<Option<String>> {
    let response: MwSearchResponse = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("Wikipedia search response: {e}")))?;
    Ok(response
        .query
        .search
        .into_iter()
        .next()
        .map(|page| page.title))
}

/// Map a RESTBase page summary onto a normalised result.
pub(crate) fn parse_page_summary(json: &str) -> Result<SearchResult> {
    let summary: PageSummary = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("Wikipedia page summary: {e}")))?;
    Ok(SearchResult {
        title: summary.title,
        summary: summary.extract,
        key_points: vec![],
        thumbnail: summary.thumbnail.map(|t| t.source),
        url: summary.content_urls.desktop.page,
        source: SourceKind::Wikipedia,
    })
}
