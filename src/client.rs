//! The Pipefy API client.
//!
//! [`PipefyClient`] is the entry point of the crate. The per-operation
//! methods (cards, phases, pipes, comments) are defined in
//! [`resources`](crate::resources); this module holds construction and the
//! raw-document escape hatch.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{GraphqlClient, PipefyError};
use crate::config::PipefyConfig;
use crate::query::{Document, DocumentBuilder};

/// Client for the Pipefy GraphQL API.
///
/// # Thread Safety
///
/// `PipefyClient` is `Send + Sync`. Calls share only immutable
/// configuration, so one client can serve many concurrent tasks.
///
/// # Example
///
/// ```rust,ignore
/// use pipefy_api::{ApiToken, PipefyClient, PipefyConfig};
///
/// let config = PipefyConfig::builder()
///     .api_token(ApiToken::new(std::env::var("PIPEFY_TOKEN")?)?)
///     .retry_attempts(3)
///     .build()?;
/// let client = PipefyClient::new(&config)?;
///
/// let card = client.card("123", Some("id title"), None).await?;
/// println!("{}", card["title"]);
/// ```
#[derive(Debug)]
pub struct PipefyClient {
    graphql: GraphqlClient,
}

// Verify PipefyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PipefyClient>();
};

impl PipefyClient {
    /// Creates a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Network`] if the HTTP transport cannot be built.
    pub fn new(config: &PipefyConfig) -> Result<Self, PipefyError> {
        Ok(Self {
            graphql: GraphqlClient::new(config)?,
        })
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Executes a caller-supplied document and returns the whole success envelope.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::InvalidQuery`] if the document is not closed,
    /// otherwise the classified error of the final attempt.
    pub async fn execute(
        &self,
        document: &str,
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let document = Document::new(document)?;
        self.graphql.query(&document, headers).await
    }

    /// Executes a caller-supplied document and deserializes `data.<path>`.
    ///
    /// # Errors
    ///
    /// Returns [`PipefyError::Deserialize`] if the fragment does not match
    /// `T`, [`PipefyError::InvalidQuery`] if the document is not closed,
    /// otherwise the classified error of the final attempt.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        document: &str,
        path: &[&str],
        headers: Option<HashMap<String, String>>,
    ) -> Result<T, PipefyError> {
        let document = Document::new(document)?;
        self.graphql.data_as(&document, path, headers).await
    }

    /// Builds a templated document and returns the fragment at `data.<path>`.
    pub(crate) async fn fetch(
        &self,
        builder: DocumentBuilder,
        path: &[&str],
        headers: Option<HashMap<String, String>>,
    ) -> Result<Value, PipefyError> {
        let document = builder.build()?;
        self.graphql.data(&document, path, headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiToken;

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PipefyClient>();
    }

    #[tokio::test]
    async fn test_execute_rejects_unclosed_document_without_sending() {
        let config = PipefyConfig::builder()
            .api_token(ApiToken::new("token").unwrap())
            .endpoint(crate::config::Endpoint::new("http://127.0.0.1:9/graphql").unwrap())
            .build()
            .unwrap();
        let client = PipefyClient::new(&config).unwrap();

        let result = client.execute("{ me { id }", None).await;

        assert!(matches!(result, Err(PipefyError::InvalidQuery(_))));
    }
}
