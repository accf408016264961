//! Configuration types for the Pipefy API client.
//!
//! This module provides the configuration used to initialize a
//! [`PipefyClient`](crate::PipefyClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`PipefyConfig`]: The configuration struct holding all client settings
//! - [`PipefyConfigBuilder`]: A builder for constructing [`PipefyConfig`] instances
//! - [`ApiToken`]: A bearer token newtype with masked debug output
//! - [`Endpoint`]: A validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use pipefy_api::{ApiToken, PipefyConfig};
//!
//! let config = PipefyConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .retry_attempts(3)
//!     .retry_delay(Duration::from_secs(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retry_attempts(), 3);
//! ```

mod newtypes;

pub use newtypes::{ApiToken, Endpoint};

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of attempts per call (a single request, no retries).
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 1;

/// Default fixed wait between attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Configuration for the Pipefy API client.
///
/// Holds the credential, the endpoint, the retry budget, and transport
/// settings. A configuration is immutable once built.
///
/// # Thread Safety
///
/// `PipefyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Certificate Verification
///
/// TLS certificates are verified unless
/// [`accept_invalid_certs`](PipefyConfigBuilder::accept_invalid_certs) is
/// explicitly turned on.
#[derive(Clone, Debug)]
pub struct PipefyConfig {
    api_token: ApiToken,
    endpoint: Endpoint,
    retry_attempts: u32,
    retry_delay: Duration,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    accept_invalid_certs: bool,
    user_agent_prefix: Option<String>,
}

impl PipefyConfig {
    /// Creates a new builder for constructing a `PipefyConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipefy_api::{ApiToken, PipefyConfig};
    ///
    /// let config = PipefyConfig::builder()
    ///     .api_token(ApiToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> PipefyConfigBuilder {
        PipefyConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the maximum number of attempts per call.
    #[must_use]
    pub const fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    /// Returns the fixed delay between attempts.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the whole-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the connect timeout, if configured.
    #[must_use]
    pub const fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Returns whether invalid TLS certificates are accepted.
    #[must_use]
    pub const fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PipefyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PipefyConfig>();
};

/// Builder for constructing [`PipefyConfig`] instances.
///
/// The only required field is `api_token`.
///
/// # Defaults
///
/// - `endpoint`: `https://app.pipefy.com/graphql`
/// - `retry_attempts`: 1
/// - `retry_delay`: 1 second
/// - `timeout`, `connect_timeout`: `None` (transport defaults)
/// - `accept_invalid_certs`: `false`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use pipefy_api::{ApiToken, Endpoint, PipefyConfig};
///
/// let config = PipefyConfig::builder()
///     .api_token(ApiToken::new("token").unwrap())
///     .endpoint(Endpoint::new("https://proxy.example.com/graphql").unwrap())
///     .retry_attempts(5)
///     .retry_delay(Duration::from_millis(500))
///     .timeout(Duration::from_secs(30))
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct PipefyConfigBuilder {
    api_token: Option<ApiToken>,
    endpoint: Option<Endpoint>,
    retry_attempts: Option<u32>,
    retry_delay: Option<Duration>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    accept_invalid_certs: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl PipefyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Overrides the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the maximum number of attempts per call. Must be at least 1.
    #[must_use]
    pub const fn retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = Some(attempts);
        self
    }

    /// Sets the fixed delay between attempts.
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets a timeout covering the whole request, from connect to body read.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a timeout for establishing the connection.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Disables TLS certificate verification when set to `true`.
    ///
    /// # Security
    ///
    /// This exposes every request, including the bearer token, to
    /// interception. Only use it against trusted development proxies.
    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = Some(accept);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PipefyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set,
    /// or [`ConfigError::InvalidRetryAttempts`] if `retry_attempts` is 0.
    pub fn build(self) -> Result<PipefyConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        let retry_attempts = self.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS);
        if retry_attempts == 0 {
            return Err(ConfigError::InvalidRetryAttempts);
        }

        Ok(PipefyConfig {
            api_token,
            endpoint: self.endpoint.unwrap_or_default(),
            retry_attempts,
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            accept_invalid_certs: self.accept_invalid_certs.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
