//! # Pipefy API Rust Client
//!
//! An async Rust client for the Pipefy GraphQL API, providing type-safe
//! configuration, safe document assembly, response classification, and
//! fixed-delay retries.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PipefyConfig`] and [`PipefyConfigBuilder`]
//! - Validated newtypes for the API token and endpoint
//! - Document templates filled with typed [`query::Param`] values
//! - Classification of every answer into data or a [`PipefyError`]
//! - Retries of any failure with a fixed delay
//! - One method per Pipefy operation on [`PipefyClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use pipefy_api::{ApiToken, PipefyConfig};
//!
//! let config = PipefyConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .retry_attempts(3)
//!     .retry_delay(Duration::from_secs(2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://app.pipefy.com/graphql");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use pipefy_api::{PipefyClient, UpdateCardInput, DEFAULT_PHASE_CARD_COUNT};
//! use serde_json::json;
//!
//! let client = PipefyClient::new(&config)?;
//!
//! // Query a card with the default selection
//! let card = client.card("123", None, None).await?;
//!
//! // List cards matching a filter
//! let filter = json!({"field": "status", "operator": "equal", "value": "Open"});
//! let cards = client.all_cards(301, Some(&filter), None, None).await?;
//!
//! // A phase with its first page of cards
//! let phase = client
//!     .phase(42, DEFAULT_PHASE_CARD_COUNT, None, None, None, None)
//!     .await?;
//!
//! // Update a card
//! let input = UpdateCardInput::new("123").title("Follow up");
//! let updated = client.update_card(&input, None, None).await?;
//!
//! // Anything else
//! let me = client.execute("{ me { id name } }", None).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<_, PipefyError>`. Failures of any kind are
//! retried up to the configured attempt budget; the error of the last
//! attempt is returned:
//!
//! ```rust,ignore
//! use pipefy_api::PipefyError;
//!
//! match client.pipe(301, None, None).await {
//!     Ok(pipe) => println!("{}", pipe["name"]),
//!     Err(e) if e.is_rate_limited() => eprintln!("slow down: {e}"),
//!     Err(e) => eprintln!("Pipefy call failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and documents validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::PipefyClient;
pub use config::{ApiToken, Endpoint, PipefyConfig, PipefyConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{GraphqlClient, HttpClient, HttpResponse, PipefyError, RetryPolicy};

// Re-export query and operation types
pub use query::templates::DEFAULT_PHASE_CARD_COUNT;
pub use query::{Document, InvalidQueryError, Param};
pub use resources::{UpdateCardInput, UpdatePhaseFieldInput};
