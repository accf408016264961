//! HTTP client for Pipefy API communication.
//!
//! This module provides the [`HttpClient`] type, which posts GraphQL
//! documents to the configured endpoint and retries failed calls.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::PipefyError;
use crate::clients::http_response::HttpResponse;
use crate::clients::retry::RetryPolicy;
use crate::config::{Endpoint, PipefyConfig};
use crate::query::Document;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

/// HTTP client for making requests to the Pipefy GraphQL endpoint.
///
/// The client handles:
/// - Default headers including `Authorization`, `Content-Type`, and `User-Agent`
/// - Per-call header overrides
/// - Response classification
/// - Fixed-delay retries for any failure
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// It holds no per-call mutable state.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The GraphQL endpoint every request is posted to.
    endpoint: Endpoint,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Attempt budget and delay.
    retry: RetryPolicy,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &PipefyConfig) -> Result<Self, PipefyError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Pipefy API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.api_token().as_ref().to_string(),
        );
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(config.accept_invalid_certs());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        if config.accept_invalid_certs() {
            tracing::warn!(
                endpoint = %config.endpoint(),
                "TLS certificate verification is disabled for Pipefy requests"
            );
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint().clone(),
            default_headers,
            retry: RetryPolicy::from_config(config),
        })
    }

    /// Returns the endpoint for this client.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the retry policy for this client.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Sends a document and returns the decoded envelope of a successful call.
    ///
    /// Each attempt posts the document and classifies the answer. Failures
    /// of any kind are retried according to the [`RetryPolicy`]; only the
    /// last attempt's error is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`PipefyError`] of the final attempt.
    pub async fn request(
        &self,
        document: &Document,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let merged = merge_headers(&self.default_headers, headers);
        let headers = &merged;

        self.retry
            .run(move |attempt| {
                async move {
                    tracing::debug!(attempt, endpoint = %self.endpoint, "Sending Pipefy request");
                    let response = self.send(document, headers).await?;
                    if let Some(request_id) = response.request_id() {
                        tracing::debug!(attempt, request_id, code = response.code, "Pipefy responded");
                    }
                    response.classify()
                }
            })
            .await
    }

    /// Performs a single POST of `{"query": document}` with the given headers.
    async fn send(
        &self,
        document: &Document,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, PipefyError> {
        let mut req_builder = self.client.post(self.endpoint.as_ref());
        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder
            .json(&QueryBody {
                query: document.as_str(),
            })
            .send()
            .await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Overlays per-call headers on the defaults. Names compare case-insensitively
/// and the per-call value wins.
fn merge_headers(
    defaults: &HashMap<String, String>,
    overrides: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut merged = defaults.clone();
    for (key, value) in overrides.into_iter().flatten() {
        merged.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    fn create_test_config() -> PipefyConfig {
        PipefyConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_config_endpoint() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.endpoint().as_ref(), "https://app.pipefy.com/graphql");
    }

    #[test]
    fn test_authorization_header_carries_bearer_token() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_content_type_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Pipefy API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = PipefyConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Pipefy API Library"));
    }

    #[test]
    fn test_retry_policy_comes_from_config() {
        let config = PipefyConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .retry_attempts(4)
            .retry_delay(std::time::Duration::from_millis(250))
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        assert_eq!(client.retry_policy().attempts(), 4);
        assert_eq!(
            client.retry_policy().delay(),
            std::time::Duration::from_millis(250)
        );
    }

    #[test]
    fn test_merge_headers_per_call_wins_case_insensitively() {
        let mut defaults = HashMap::new();
        defaults.insert("Authorization".to_string(), "Bearer a".to_string());
        defaults.insert("Content-Type".to_string(), "application/json".to_string());

        let mut overrides = HashMap::new();
        overrides.insert("authorization".to_string(), "Bearer b".to_string());
        overrides.insert("X-Trace".to_string(), "1".to_string());

        let merged = merge_headers(&defaults, Some(&overrides));

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("authorization"), Some(&"Bearer b".to_string()));
        assert!(!merged.contains_key("Authorization"));
        assert_eq!(merged.get("X-Trace"), Some(&"1".to_string()));
        assert_eq!(
            merged.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_merge_headers_without_overrides_keeps_defaults() {
        let mut defaults = HashMap::new();
        defaults.insert("Accept".to_string(), "application/json".to_string());
        assert_eq!(merge_headers(&defaults, None), defaults);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
