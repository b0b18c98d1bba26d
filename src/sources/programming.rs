//! Keyword-gated placeholder for programming documentation lookups.
//!
//! Activates only when the query mentions a programming topic and
//! returns a single canned record pointing at MDN search. A live
//! documentation backend has not been wired up yet.

use crate::adapter::SourceAdapter;
use crate::config::AggregatorConfig;
use crate::error::Result;
use crate::types::{SearchResult, SourceKind};

/// Topics that mark a query as programming-related. Matched as
/// case-insensitive substrings.
const PROGRAMMING_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "typescript",
    "css",
    "html",
    "sql",
    "api",
    "function",
    "class",
    "variable",
];

/// Programming documentation placeholder adapter.
pub struct ProgrammingSource;

impl SourceAdapter for ProgrammingSource {
    async fn fetch(&self, query: &str, _config: &AggregatorConfig) -> Result<Vec<SearchResult>> {
        let lowered = query.to_lowercase();
        if !PROGRAMMING_KEYWORDS
            .iter()
            .any(|keyword| lowered.contains(keyword))
        {
            return Ok(vec![]);
        }

        tracing::trace!(query, "programming placeholder matched");

        Ok(vec![SearchResult {
            title: format!("Programming documentation: \"{query}\""),
            summary: "To enable programming wiki integration, implement MDN Web Docs API, \
                      DevDocs, or language-specific documentation APIs. This will provide \
                      code examples and API references."
                .to_string(),
            key_points: vec![
                "Code examples and syntax".to_string(),
                "API documentation".to_string(),
                "Best practices and guides".to_string(),
            ],
            thumbnail: None,
            url: format!(
                "https://developer.mozilla.org/en-US/search?q={}",
                urlencoding::encode(query)
            ),
            source: SourceKind::Programming,
        }])
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Programming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unrelated_query_yields_empty() {
        let source = ProgrammingSource;
        let config = AggregatorConfig::default();
        let results = source
            .fetch("ferris wheel history", &config)
            .await
            .expect("should succeed");
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn keyword_query_yields_canned_record() {
        let source = ProgrammingSource;
        let config = AggregatorConfig::default();
        let results = source
            .fetch("python decorators", &config)
            .await
            .expect("should succeed");
        assert_eq!(results.len(), 1);

        let record = &results[0];
        assert_eq!(record.title, "Programming documentation: \"python decorators\"");
        assert!(record.summary.starts_with("To enable programming wiki integration"));
        assert_eq!(record.key_points.len(), 3);
        assert_eq!(record.source, SourceKind::Programming);
    }

    #[tokio::test]
    async fn keyword_gate_is_case_insensitive() {
        let source = ProgrammingSource;
        let config = AggregatorConfig::default();
        let results = source
            .fetch("PYTHON Decorators", &config)
            .await
            .expect("should succeed");
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn handoff_url_encodes_query() {
        let source = ProgrammingSource;
        let config = AggregatorConfig::default();
        let results = source
            .fetch("css grid & flexbox", &config)
            .await
            .expect("should succeed");
        assert_eq!(
            results[0].url,
            "https://developer.mozilla.org/en-US/search?q=css%20grid%20%26%20flexbox"
        );
    }

    #[tokio::test]
    async fn substring_match_fires_inside_words() {
        // "api" matches inside "rapid"; the gate is a plain substring check.
        let source = ProgrammingSource;
        let config = AggregatorConfig::default();
        let results = source
            .fetch("rapid transit", &config)
            .await
            .expect("should succeed");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn kind_is_programming() {
        let source = ProgrammingSource;
        assert_eq!(source.kind(), SourceKind::Programming);
    }
}
