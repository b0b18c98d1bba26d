//! Minecraft Wiki — article search via the MediaWiki API.
//!
//! One call to the wiki's `api.php` full-text search. The top hit's
//! snippet is stripped of markup and emitted as a single result with
//! no thumbnail.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::{AggregateError, Result};
use crate::http;
use crate::types::{SearchResult, SourceKind};
use scraper::Html;
use serde::Deserialize;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://minecraft.fandom.com";

/// Minecraft Wiki search adapter.
///
/// Third in the authority order, behind the encyclopaedia and the
/// creature database.
pub struct MinecraftSource {
    base_url: String,
}

impl Default for MinecraftSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl MinecraftSource {
    /// Override the wiki base URL. Intended for tests against a local
    /// mock server. Article links resolve against the same base.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SourceAdapter for MinecraftSource {
    async fn fetch(&self, query: &str, config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        tracing::trace!(query, "Minecraft Wiki search");

        let client = http::build_client(config)?;

        let response = client
            .get(format!("{}/api.php", self.base_url))
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
                ("origin", "*"),
            ])
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("Minecraft Wiki request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("Minecraft Wiki HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("Minecraft Wiki response read failed: {e}")))?;

        Ok(parse_top_article(&body, &self.base_url)?.into_iter().collect())
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Minecraft
    }
}

#[derive(Deserialize)]
struct WikiSearchResponse {
    query: WikiSearchQuery,
}

#[derive(Deserialize)]
struct WikiSearchQuery {
    search: Vec<WikiSearchPage>,
}

#[derive(Deserialize)]
struct WikiSearchPage {
    title: String,
    snippet: String,
}

/// Map the top wiki search hit onto a normalised result. Returns `None`
/// when the search matched nothing.
///
/// Extracted as a separate function for testability with mock JSON.
pub(crate) fn parse_top_article(json: &str, base_url: &str) -> Result<Option<SearchResult>> {
    let response: WikiSearchResponse = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("Minecraft Wiki search response: {e}")))?;

    let Some(page) = response.query.search.into_iter().next() else {
        return Ok(None);
    };

    let url = article_url(base_url, &page.title)?;
    Ok(Some(SearchResult {
        title: page.title,
        summary: strip_markup(&page.snippet),
        key_points: vec![],
        thumbnail: None,
        url,
        source: SourceKind::Minecraft,
    }))
}

/// Strip search-match markup from a MediaWiki snippet, leaving plain
/// text. Snippets arrive with `<span class="searchmatch">` highlights
/// and HTML entities.
pub(crate) fn strip_markup(snippet: &str) -> String {
    Html::parse_fragment(snippet).root_element().text().collect()
}

/// Build the article URL for a page title. The title goes into a path
/// segment, so it is percent-encoded here.
fn article_url(base_url: &str, title: &str) -> Result<String> {
    let mut url = Url::parse(base_url)
        .map_err(|e| AggregateError::Parse(format!("invalid Minecraft Wiki base URL: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AggregateError::Parse("Minecraft Wiki base URL cannot be a base".into()))?
        .pop_if_empty()
        .extend(["wiki", title]);
    Ok(url.into())
}
