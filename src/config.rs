//! Aggregator configuration with sensible defaults.
//!
//! [`AggregatorConfig`] controls which knowledge sources are queried, the
//! per-request timeout, and request behaviour. The defaults query every
//! registered source.

use crate::error::AggregateError;
use crate::types::SourceKind;

/// Configuration for an aggregation query.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Which knowledge sources to query. Queried concurrently; the
    /// category order of the output follows this order.
    pub sources: Vec<SourceKind>,
    /// Per-request HTTP timeout in seconds. Applies to each call an
    /// adapter makes, not to the aggregation as a whole.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            sources: SourceKind::all().to_vec(),
            timeout_seconds: 8,
            user_agent: None,
        }
    }
}

impl AggregatorConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `sources` must not be empty
    pub fn validate(&self) -> Result<(), AggregateError> {
        if self.timeout_seconds == 0 {
            return Err(AggregateError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.sources.is_empty() {
            return Err(AggregateError::Config(
                "at least one source must be enabled".into(),
            ));
        }
        Ok(())
    }
}
