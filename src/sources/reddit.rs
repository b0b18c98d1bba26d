//! Reddit — community discussion threads from the public search listing.
//!
//! A single call to `/search.json` returns the top matching threads.
//! Key points are synthesised from engagement counters rather than
//! copied from thread text, since thread bodies are often empty.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::{AggregateError, Result};
use crate::http;
use crate::types::{SearchResult, SourceKind};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// How many threads to keep from the search listing.
const MAX_THREADS: usize = 3;

/// Reddit search adapter.
pub struct RedditSource {
    base_url: String,
}

impl Default for RedditSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl RedditSource {
    /// Override the API base URL. Intended for tests against a local
    /// mock server. Thread permalinks resolve against the same base.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SourceAdapter for RedditSource {
    async fn fetch(&self, query: &str, config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        tracing::trace!(query, "Reddit search");

        let client = http::build_client(config)?;

        let response = client
            .get(format!("{}/search.json", self.base_url))
            .query(&[("q", query), ("limit", "3")])
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("Reddit request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("Reddit HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("Reddit response read failed: {e}")))?;

        parse_search_listing(&body, &self.base_url)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Reddit
    }
}

#[derive(Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    children: Vec<Thread>,
}

#[derive(Deserialize)]
struct Thread {
    data: ThreadData,
}

#[derive(Deserialize)]
struct ThreadData {
    title: String,
    #[serde(default)]
    selftext: String,
    #[serde(default)]
    ups: i64,
    #[serde(default)]
    num_comments: i64,
    subreddit: String,
    // Non-URL sentinels like "self" or "default" appear here; only
    // http(s) values are usable as thumbnails.
    #[serde(default)]
    thumbnail: Option<String>,
    permalink: String,
}

/// Map a Reddit search listing onto normalised results, at most
/// [`MAX_THREADS`] of them.
///
/// Extracted as a separate function for testability with mock JSON.
pub(crate) fn parse_search_listing(json: &str, base_url: &str) -> Result<Vec<SearchResult>> {
    let listing: Listing = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("Reddit search listing: {e}")))?;

    let results = listing
        .data
        .children
        .into_iter()
        .take(MAX_THREADS)
        .map(|thread| {
            let post = thread.data;
            let summary = if post.selftext.is_empty() {
                "Discussion thread on Reddit".to_string()
            } else {
                post.selftext
            };
            SearchResult {
                title: post.title,
                summary,
                key_points: vec![
                    format!("{} upvotes", post.ups),
                    format!("{} comments", post.num_comments),
                    format!("r/{}", post.subreddit),
                ],
                thumbnail: post.thumbnail.filter(|t| t.starts_with("http")),
                url: format!("{base_url}{}", post.permalink),
                source: SourceKind::Reddit,
            }
        })
        .collect();

    Ok(results)
}
