//! HTTP and GraphQL client types for Pipefy API communication.
//!
//! This module provides the layers beneath
//! [`PipefyClient`](crate::PipefyClient): the transport, the response
//! classifier, the retry driver, and a document-level GraphQL client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Posts documents to the endpoint and drives retries
//! - [`HttpResponse`]: A raw response and its classification
//! - [`RetryPolicy`]: Attempt budget and fixed delay
//! - [`GraphqlClient`]: Executes documents and extracts `data` fragments
//! - [`PipefyError`]: The error returned by every call
//!
//! # Retry Behavior
//!
//! Any failure (malformed body, API error, rate limiting, network error) is
//! retried after a fixed delay until the attempt budget is spent. The
//! default budget is 1, meaning no automatic retries. Configure it via
//! [`PipefyConfigBuilder::retry_attempts`](crate::PipefyConfigBuilder::retry_attempts).

mod errors;
pub mod graphql;
mod http_client;
mod http_response;
mod retry;

pub use errors::{PipefyError, RATE_LIMITED_MESSAGE};
pub use graphql::{extract_data, GraphqlClient};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::{HttpResponse, HTML_DOCTYPE_MARKER};
pub use retry::RetryPolicy;
