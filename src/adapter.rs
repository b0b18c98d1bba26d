//! Trait definition for pluggable knowledge-source adapters.
//!
//! Each source (Wikipedia, Reddit, PokéAPI, Minecraft Wiki, Google,
//! YouTube, and the keyword-gated placeholders) implements
//! [`SourceAdapter`] to provide a uniform interface for querying and
//! normalising results.

use crate::config::AggregatorConfig;
use crate::error::Result;
use crate::types::{SearchResult, SourceKind};

/// A pluggable knowledge-source adapter.
///
/// Implementors query a specific provider's public API and map its
/// response into normalised [`SearchResult`] values. Each adapter
/// handles its own:
///
/// - URL construction with query encoding
/// - HTTP requests with appropriate headers
/// - JSON (or HTML-snippet) response parsing
/// - Synthesis of key points from structured provider fields
///
/// Callers in the dispatch path use [`SourceAdapter::search`], which
/// never fails: any fault inside [`SourceAdapter::fetch`] is logged and
/// converted to an empty result list, so one provider's outage cannot
/// block or fail a whole query.
///
/// All implementations must be `Send + Sync` for concurrent fan-out.
pub trait SourceAdapter: Send + Sync {
    /// Query the provider and return normalised results.
    ///
    /// # Arguments
    ///
    /// * `query` — The free-text query (URL-safe is not required; the
    ///   implementation handles encoding).
    /// * `config` — Aggregator configuration controlling timeouts and
    ///   request headers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AggregateError`] if an HTTP request fails or the
    /// response cannot be parsed. A provider having nothing relevant to
    /// say is not an error: that is `Ok` with an empty list.
    fn fetch(
        &self,
        query: &str,
        config: &AggregatorConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>>> + Send;

    /// Returns which [`SourceKind`] this adapter represents.
    fn kind(&self) -> SourceKind;

    /// Query the provider with all faults absorbed.
    ///
    /// Wraps [`SourceAdapter::fetch`], logging any failure at warn level
    /// and returning an empty list in its place. The dispatcher relies
    /// on this: "no results" and "provider down" look identical to the
    /// merge stage, which only distinguishes empty from non-empty.
    fn search(
        &self,
        query: &str,
        config: &AggregatorConfig,
    ) -> impl std::future::Future<Output = Vec<SearchResult>> + Send {
        async move {
            match self.fetch(query, config).await {
                Ok(results) => results,
                Err(error) => {
                    tracing::warn!(
                        source = %self.kind(),
                        %error,
                        "source query failed; continuing without it"
                    );
                    Vec::new()
                }
            }
        }
    }
}
