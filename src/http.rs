//! Shared HTTP client with User-Agent rotation for knowledge-source requests.
//!
//! Provides a configured [`reqwest::Client`] that identifies itself like a
//! browser and asks for JSON. Some public endpoints (notably Reddit's
//! search listing) throttle default library User-Agents.

use crate::config::AggregatorConfig;
use crate::error::AggregateError;
use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;

/// Browser User-Agent pool; one entry is picked per client build.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] configured for knowledge-API queries:
/// the configured per-request timeout, a rotated (or pinned) User-Agent,
/// a default `Accept: application/json` header since every queried API
/// speaks JSON, brotli/gzip decompression, and a 10-hop redirect cap.
///
/// # Errors
///
/// Returns [`AggregateError::Http`] if the client cannot be constructed.
pub fn build_client(config: &AggregatorConfig) -> Result<reqwest::Client, AggregateError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| AggregateError::Http(format!("failed to build HTTP client: {e}")))
}

/// Pick a User-Agent from the pool.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: the pool is a non-empty const, so choose cannot return None
        .unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn rotation_draws_from_the_pool() {
        for _ in 0..20 {
            let ua = random_user_agent();
            assert!(USER_AGENTS.contains(&ua));
            assert!(ua.starts_with("Mozilla/5.0"));
        }
    }

    #[tokio::test]
    async fn client_asks_for_json() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/probe"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_client(&AggregatorConfig::default()).expect("client builds");
        let response = client
            .get(format!("{}/probe", server.uri()))
            .send()
            .await
            .expect("request succeeds");
        assert!(response.status().is_success());
    }

    #[tokio::test]
    async fn pinned_user_agent_reaches_the_wire() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/probe"))
            .and(header("user-agent", "auragen-test/0.1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let config = AggregatorConfig {
            user_agent: Some("auragen-test/0.1".into()),
            ..Default::default()
        };
        let client = build_client(&config).expect("client builds");
        let response = client
            .get(format!("{}/probe", server.uri()))
            .send()
            .await
            .expect("request succeeds");
        assert!(response.status().is_success());
    }
}
