//! Error types for Pipefy API calls.
//!
//! # Error Handling
//!
//! Every failed call returns a [`PipefyError`]. The first three variants are
//! the response taxonomy decided by
//! [`HttpResponse::classify`](crate::clients::HttpResponse::classify):
//!
//! - [`PipefyError::MalformedResponse`]: the body was not valid JSON
//! - [`PipefyError::Api`]: the service reported an error (`error`,
//!   `errors`, or a non-200 status)
//! - [`PipefyError::RateLimited`]: an HTML throttling page came back
//!
//! # Example
//!
//! ```rust,ignore
//! use pipefy_api::PipefyError;
//!
//! match client.card("123", None, None).await {
//!     Ok(card) => println!("{}", card["title"]),
//!     Err(PipefyError::RateLimited { .. }) => { /* back off */ }
//!     Err(PipefyError::Api { message }) => println!("Pipefy said: {message}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::query::InvalidQueryError;

/// Message carried by [`PipefyError::RateLimited`].
pub const RATE_LIMITED_MESSAGE: &str = "Error HTTP 429 - Too Many Requests";

/// Unified error type for Pipefy API calls.
#[derive(Debug, Error)]
pub enum PipefyError {
    /// The response body could not be decoded as JSON.
    #[error("Malformed response: {body}")]
    MalformedResponse {
        /// The raw response text.
        body: String,
    },

    /// The service reported an application-level error.
    #[error("{message}")]
    Api {
        /// The message extracted from the response envelope.
        message: String,
    },

    /// The service answered with an HTML throttling page.
    #[error("{message}")]
    RateLimited {
        /// A description of the throttling.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The GraphQL document could not be assembled.
    #[error(transparent)]
    InvalidQuery(#[from] InvalidQueryError),

    /// A response fragment did not match the requested type.
    #[error("Failed to deserialize response data: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl PipefyError {
    /// Returns `true` for [`PipefyError::RateLimited`].
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Returns `true` for [`PipefyError::Api`].
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns `true` for [`PipefyError::MalformedResponse`].
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}
