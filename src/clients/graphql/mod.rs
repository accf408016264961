//! GraphQL API client for Pipefy.
//!
//! This module provides a GraphQL client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that executes
//! [`Document`](crate::query::Document)s and returns the `data` fragment the
//! caller asked for.
//!
//! # Response Structure
//!
//! Pipefy responses contain these fields in the body:
//!
//! - `data`: The query result data
//! - `errors`: GraphQL errors, surfaced as [`PipefyError::Api`](crate::PipefyError::Api)
//! - `error` / `error_description`: authentication and transport errors
//!
//! # Retry Behavior
//!
//! Every call is attempted up to the configured number of times with a
//! fixed delay between attempts. See [`RetryPolicy`](crate::clients::RetryPolicy).

mod client;

pub use client::{extract_data, GraphqlClient};
