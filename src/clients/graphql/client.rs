//! GraphQL client implementation for the Pipefy API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! documents and picking fragments out of the `data` member of the answer.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::clients::{HttpClient, PipefyError};
use crate::config::PipefyConfig;
use crate::query::Document;

/// GraphQL API client for Pipefy.
///
/// Provides `query` for the whole success envelope, and `data` / `data_as`
/// for a fragment below `data`.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pipefy_api::{ApiToken, PipefyConfig};
/// use pipefy_api::clients::GraphqlClient;
/// use pipefy_api::query::Document;
///
/// let config = PipefyConfig::builder()
///     .api_token(ApiToken::new("token")?)
///     .build()?;
/// let client = GraphqlClient::new(&config)?;
///
/// let document = Document::new("{ me { id name } }")?;
/// let me = client.data(&document, &["me"], None).await?;
/// println!("{}", me["name"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Network`] if the HTTP transport cannot be built.
    pub fn new(config: &PipefyConfig) -> Result<Self, PipefyError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes a document and returns the whole success envelope.
    ///
    /// # Arguments
    ///
    /// * `document` - The GraphQL query or mutation
    /// * `headers` - Optional headers overriding the defaults for this call
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn query(
        &self,
        document: &Document,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        self.http_client.request(document, headers.as_ref()).await
    }

    /// Executes a document and returns the fragment at `data.<path>`.
    ///
    /// A missing or `null` fragment comes back as an empty object.
    ///
    /// # Errors
    ///
    /// Returns the classified [`PipefyError`] of the final attempt.
    pub async fn data(
        &self,
        document: &Document,
        path: &[&str],
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let envelope = self.query(document, headers).await?;
        Ok(extract_data(envelope, path))
    }

    /// Executes a document and deserializes the fragment at `data.<path>`.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Deserialize`] if the fragment does not match
    /// `T`, or the classified error of the final attempt.
    pub async fn data_as<T: DeserializeOwned>(
        &self,
        document: &Document,
        path: &[&str],
        headers: Option<HashMap<String, String>>,
    ) -> Result<T, PipefyError> {
        let fragment = self.data(document, path, headers).await?;
        Ok(serde_json::from_value(fragment)?)
    }
}

/// Takes the value at `data.<path>` out of an envelope.
///
/// Returns an empty object if any step is missing or `null`.
///
/// # Example
///
/// ```rust
/// use pipefy_api::clients::extract_data;
/// use serde_json::json;
///
/// let envelope = json!({"data": {"moveCardToPhase": {"card": {"id": "1"}}}});
/// assert_eq!(extract_data(envelope, &["moveCardToPhase", "card"]), json!({"id": "1"}));
///
/// assert_eq!(extract_data(json!({"data": null}), &["card"]), json!({}));
/// ```
#[must_use]
pub fn extract_data(envelope: Value, path: &[&str]) -> Value {
    let mut current = envelope;
    for key in std::iter::once(&"data").chain(path) {
        current = match current {
            Value::Object(mut map) => map.remove(*key).unwrap_or(Value::Null),
            _ => Value::Null,
        };
    }

    if current.is_null() {
        Value::Object(Map::new())
    } else {
        current
    }
}
