//! # auragen
//!
//! Multi-source answer aggregation for "ask anything" queries.
//!
//! This crate answers free-text questions by querying several public
//! knowledge APIs at once (Wikipedia, Reddit, PokéAPI, the Minecraft
//! Wiki, Google Programmable Search, YouTube) and merging whatever
//! comes back into one summary with supporting links. It compiles into
//! a host application as a library dependency.
//!
//! ## Design
//!
//! - Queries all configured sources concurrently and groups their
//!   results into labelled categories
//! - Graceful degradation: a failing source contributes nothing instead
//!   of failing the whole query
//! - The unified summary is seeded by the most authoritative source and
//!   topped up with distinct sentences borrowed from the rest
//! - Key points are de-duplicated across sources (at most five kept),
//!   supporting links by exact URL (at most three kept)
//!
//! ## Security
//!
//! - Google and YouTube API keys are read from the environment, never
//!   from configuration
//! - No network listeners; this is a library, not a server
//! - Queries are logged only at trace level

pub mod adapter;
pub mod aggregator;
pub mod config;
pub mod error;
pub mod http;
pub mod sources;
pub mod types;

pub use adapter::SourceAdapter;
pub use config::AggregatorConfig;
pub use error::{AggregateError, Result};
pub use types::{Answer, CategoryResults, SearchResult, SourceKind, SourceLink, UnifiedSummary};

/// Answer a query by aggregating all configured knowledge sources.
///
/// Queries every source in `config` concurrently, groups results into
/// categories, builds a unified summary seeded by the most
/// authoritative contributor, and attaches up to three de-duplicated
/// supporting links. A query no source can answer yields an [`Answer`]
/// with no summary, not an error.
///
/// # Errors
///
/// Returns [`AggregateError::Config`] if the configuration is invalid.
/// Individual source failures are logged at warn level and never fail
/// the aggregation.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> auragen::Result<()> {
/// let config = auragen::AggregatorConfig::default();
/// let answer = auragen::ask("who is the strongest pokemon", &config).await?;
/// if let Some(summary) = &answer.summary {
///     println!("{}", summary.main_answer);
/// }
/// for link in &answer.links {
///     println!("{}: {}", link.title, link.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn ask(query: &str, config: &AggregatorConfig) -> Result<Answer> {
    config.validate()?;
    let categories = aggregator::dispatch::dispatch_all(query, config).await;
    let summary = aggregator::summary::summarize(&categories, query);
    let links = aggregator::links::extract_links(&categories);
    Ok(Answer {
        summary,
        links,
        categories,
    })
}

/// Answer a query with sensible default configuration.
///
/// Convenience wrapper around [`ask`] using
/// [`AggregatorConfig::default()`].
///
/// # Errors
///
/// Same as [`ask`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> auragen::Result<()> {
/// let answer = auragen::ask_default("tallest mountain on earth").await?;
/// println!("{} categories answered", answer.categories.len());
/// # Ok(())
/// # }
/// ```
pub async fn ask_default(query: &str) -> Result<Answer> {
    ask(query, &AggregatorConfig::default()).await
}
