//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A Pipefy API token carrying the `Bearer` authorization scheme.
///
/// The token is accepted with or without a `Bearer ` prefix and is stored
/// with the prefix exactly once, ready to be sent as the `Authorization`
/// header value.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use pipefy_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "Bearer my-token");
///
/// let token = ApiToken::new("Bearer my-token").unwrap();
/// assert_eq!(token.as_ref(), "Bearer my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    const SCHEME: &'static str = "Bearer";

    /// Creates a new API token, normalizing the bearer prefix.
    ///
    /// A leading `Bearer` (any case) followed by whitespace is removed,
    /// repeatedly, before the single canonical prefix is added.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if nothing remains once
    /// whitespace and any bearer prefixes are removed.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        let mut raw = token.trim();

        while let Some((scheme, rest)) = raw.split_once(char::is_whitespace) {
            if !scheme.eq_ignore_ascii_case(Self::SCHEME) {
                break;
            }
            raw = rest.trim_start();
        }

        if raw.is_empty() || raw.eq_ignore_ascii_case(Self::SCHEME) {
            return Err(ConfigError::EmptyApiToken);
        }

        Ok(Self(format!("{} {raw}", Self::SCHEME)))
    }

    /// Returns the token without the bearer scheme.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0[Self::SCHEME.len() + 1..]
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated GraphQL endpoint URL.
///
/// Only absolute `http` and `https` URLs with a non-empty host are accepted.
///
/// # Example
///
/// ```rust
/// use pipefy_api::Endpoint;
///
/// let endpoint = Endpoint::default();
/// assert_eq!(endpoint.as_ref(), "https://app.pipefy.com/graphql");
///
/// let endpoint = Endpoint::new("http://localhost:8080/graphql").unwrap();
/// assert_eq!(endpoint.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// The public Pipefy GraphQL endpoint.
    pub const PIPEFY: &'static str = "https://app.pipefy.com/graphql";

    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL is not an absolute
    /// `http(s)` URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidEndpoint { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: Self::PIPEFY.to_string(),
            host_start: "https://".len(),
            host_end: "https://app.pipefy.com".len(),
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_rejects_empty_string() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
        assert!(matches!(ApiToken::new("   "), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_rejects_bare_scheme() {
        assert!(matches!(
            ApiToken::new("Bearer "),
            Err(ConfigError::EmptyApiToken)
        ));
        assert!(matches!(
            ApiToken::new("Bearer"),
            Err(ConfigError::EmptyApiToken)
        ));
    }

    #[test]
    fn test_api_token_adds_prefix_once() {
        for input in [
            "abc123",
            "Bearer abc123",
            "bearer abc123",
            "  Bearer abc123  ",
            "Bearer Bearer abc123",
        ] {
            let token = ApiToken::new(input).unwrap();
            assert_eq!(token.as_ref(), "Bearer abc123", "input: {input:?}");
            assert_eq!(token.as_ref().matches("Bearer").count(), 1);
        }
    }

    #[test]
    fn test_api_token_strips_prefix_before_any_whitespace() {
        for input in ["Bearer\tabc123", "BEARER\n abc123", "bearer \t Bearer\tabc123"] {
            let token = ApiToken::new(input).unwrap();
            assert_eq!(token.as_ref(), "Bearer abc123", "input: {input:?}");
            assert_eq!(token.secret(), "abc123");
        }
        assert!(matches!(
            ApiToken::new("Bearer\t"),
            Err(ConfigError::EmptyApiToken)
        ));
    }

    #[test]
    fn test_api_token_keeps_tokens_that_only_start_with_scheme() {
        let token = ApiToken::new("BearerToken123").unwrap();
        assert_eq!(token.as_ref(), "Bearer BearerToken123");
    }

    #[test]
    fn test_api_token_secret_strips_scheme() {
        let token = ApiToken::new("abc123").unwrap();
        assert_eq!(token.secret(), "abc123");
    }

    #[test]
    fn test_api_token_masks_value_in_debug() {
        let token = ApiToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "ApiToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_endpoint_default_is_pipefy() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.as_ref(), Endpoint::PIPEFY);
        assert_eq!(endpoint.host_name(), "app.pipefy.com");
        assert_eq!(Endpoint::new(Endpoint::PIPEFY).unwrap(), endpoint);
    }

    #[test]
    fn test_endpoint_accepts_ports_and_paths() {
        let endpoint = Endpoint::new("http://127.0.0.1:4000/graphql").unwrap();
        assert_eq!(endpoint.host_name(), "127.0.0.1");
        assert_eq!(endpoint.to_string(), "http://127.0.0.1:4000/graphql");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        assert!(Endpoint::new("app.pipefy.com/graphql").is_err());
        assert!(Endpoint::new("https://").is_err());
        assert!(Endpoint::new("ftp://app.pipefy.com").is_err());
        assert!(Endpoint::new("://app.pipefy.com").is_err());
    }

    #[test]
    fn test_endpoint_deserializes_with_validation() {
        let endpoint: Endpoint = serde_json::from_str(r#""https://example.com/graphql""#).unwrap();
        assert_eq!(endpoint.host_name(), "example.com");

        let result: Result<Endpoint, _> = serde_json::from_str(r#""not-a-url""#);
        assert!(result.is_err());
    }
}
