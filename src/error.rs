//! Error types for the auragen crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Google and YouTube API keys never appear
//! in error messages. At the aggregation level only configuration
//! errors surface; HTTP and parse failures stay inside the failing
//! source's adapter.

/// Errors that can occur while querying knowledge sources.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    /// An HTTP request to a knowledge source failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a knowledge source response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid aggregator configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for auragen results.
pub type Result<T> = std::result::Result<T, AggregateError>;
