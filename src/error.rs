//! Error types for the Pipefy API client.
//!
//! This module contains the configuration errors raised while building a
//! [`PipefyConfig`](crate::PipefyConfig). Errors raised by API calls live in
//! [`clients`](crate::clients).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use pipefy_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Pipefy personal access token.")]
    EmptyApiToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Expected an absolute http(s) URL (e.g., 'https://app.pipefy.com/graphql').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The retry budget must allow at least one request.
    #[error("Retry attempts must be at least 1; a budget of 0 would never send a request.")]
    InvalidRetryAttempts,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
