//! YouTube — video lookups via the YouTube Data API v3.
//!
//! Two calls per query: a search for matching video ids, then a videos
//! lookup for snippet, statistics, and duration so key points can be
//! synthesised from uploader, view count, and length. Requires a
//! `YOUTUBE_API_KEY`; without one the adapter stays quiet.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::{AggregateError, Result};
use crate::http;
use crate::types::{SearchResult, SourceKind};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// How many videos to keep per query.
const MAX_VIDEOS: usize = 3;

/// YouTube Data API adapter.
pub struct YouTubeSource {
    base_url: String,
    api_key: Option<String>,
}

impl Default for YouTubeSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: std::env::var("YOUTUBE_API_KEY").ok(),
        }
    }
}

impl YouTubeSource {
    /// Create an adapter with an explicit API key instead of reading
    /// `YOUTUBE_API_KEY` from the environment.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: Some(api_key.into()),
        }
    }

    /// Override the API base URL. Intended for tests against a local
    /// mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl SourceAdapter for YouTubeSource {
    async fn fetch(&self, query: &str, config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!("YOUTUBE_API_KEY not set; skipping YouTube");
            return Ok(vec![]);
        };

        tracing::trace!(query, "YouTube search");

        let client = http::build_client(config)?;

        let response = client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", "3"),
                ("q", query),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("YouTube search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("YouTube search HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("YouTube response read failed: {e}")))?;

        let ids = parse_video_ids(&body)?;
        if ids.is_empty() {
            tracing::debug!(query, "YouTube search matched no videos");
            return Ok(vec![]);
        }

        let response = client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,statistics,contentDetails"),
                ("id", ids.join(",").as_str()),
                ("key", api_key),
            ])
            .send()
            .await
            .map_err(|e| AggregateError::Http(format!("YouTube videos request failed: {e}")))?
            .error_for_status()
            .map_err(|e| AggregateError::Http(format!("YouTube videos HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| AggregateError::Http(format!("YouTube response read failed: {e}")))?;

        parse_video_items(&body)
    }

    fn kind(&self) -> SourceKind {
        SourceKind::YouTube
    }
}

#[derive(Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Deserialize)]
struct VideoPage {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    snippet: VideoSnippet,
    statistics: VideoStatistics,
    content_details: VideoContentDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
    channel_title: String,
    #[serde(default)]
    thumbnails: VideoThumbnails,
}

#[derive(Deserialize, Default)]
struct VideoThumbnails {
    #[serde(default)]
    medium: Option<VideoThumbnail>,
}

#[derive(Deserialize)]
struct VideoThumbnail {
    url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    // The Data API serialises counters as strings.
    view_count: String,
}

#[derive(Deserialize)]
struct VideoContentDetails {
    duration: String,
}

/// Pull video ids out of a search response, at most [`MAX_VIDEOS`].
/// Non-video items carry no id and are skipped.
pub(crate) fn parse_video_ids(json: &str) -> Result<Vec<String>> {
    let response: SearchPage = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("YouTube search response: {e}")))?;
    Ok(response
        .items
        .into_iter()
        .filter_map(|item| item.id.video_id)
        .take(MAX_VIDEOS)
        .collect())
}

/// Map a videos-lookup response onto normalised results.
///
/// Extracted as a separate function for testability with mock JSON.
pub(crate) fn parse_video_items(json: &str) -> Result<Vec<SearchResult>> {
    let response: VideoPage = serde_json::from_str(json)
        .map_err(|e| AggregateError::Parse(format!("YouTube videos response: {e}")))?;

    Ok(response
        .items
        .into_iter()
        .take(MAX_VIDEOS)
        .map(|item| {
            let snippet = item.snippet;
            let summary = if snippet.description.is_empty() {
                format!("Video uploaded by {} on YouTube.", snippet.channel_title)
            } else {
                snippet.description
            };
            SearchResult {
                title: snippet.title,
                summary,
                key_points: vec![
                    format!("By {}", snippet.channel_title),
                    format!("{} views", item.statistics.view_count),
                    format!(
                        "Duration: {}",
                        humanize_duration(&item.content_details.duration)
                    ),
                ],
                thumbnail: snippet.thumbnails.medium.map(|t| t.url),
                url: format!("https://www.youtube.com/watch?v={}", item.id),
                source: SourceKind::YouTube,
            }
        })
        .collect())
}

/// Render an ISO 8601 duration such as `PT4M13S` as `4:13`. Anything
/// that does not fit the `PT(h)H(m)M(s)S` shape passes through as-is.
pub(crate) fn humanize_duration(iso: &str) -> String {
    let Some(rest) = iso.strip_prefix("PT") else {
        return iso.to_string();
    };

    let (mut hours, mut minutes, mut seconds) = (0u64, 0u64, 0u64);
    let mut digits = String::new();
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let Ok(value) = digits.parse::<u64>() else {
            return iso.to_string();
        };
        match c {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return iso.to_string(),
        }
        digits.clear();
    }
    if !digits.is_empty() {
        return iso.to_string();
    }

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
