//! Integration tests for response classification, retries, and per-call headers.

use std::collections::HashMap;
use std::time::Duration;

use pipefy_api::{ApiToken, Endpoint, PipefyClient, PipefyConfig, PipefyError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer, attempts: u32) -> PipefyClient {
    let config = PipefyConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .endpoint(Endpoint::new(format!("{}/graphql", server.uri())).unwrap())
        .retry_attempts(attempts)
        .retry_delay(Duration::ZERO)
        .build()
        .unwrap();
    PipefyClient::new(&config).unwrap()
}

async fn respond_always(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

// ============================================================================
// Retry Tests
// ============================================================================

#[tokio::test]
async fn test_two_failures_then_success_sends_three_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"errors": [{"message": "busy"}]})),
        )
        .up_to_n_times(2)
        .mount(&server)
        .await;
    respond_always(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"data": {"card": {"id": "1"}}})),
    )
    .await;
    let client = create_client(&server, 3);

    let card = client.card("1", None, None).await.unwrap();

    assert_eq!(card, json!({"id": "1"}));
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_always_failing_returns_error_after_budget() {
    let server = MockServer::start().await;
    respond_always(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"errors": [{"message": "Card not found"}]})),
    )
    .await;
    let client = create_client(&server, 3);

    let result = client.card("404", None, None).await;

    assert!(matches!(
        result,
        Err(PipefyError::Api { ref message }) if message == "Card not found"
    ));
    assert_eq!(request_count(&server).await, 3);
}

#[tokio::test]
async fn test_default_budget_sends_single_request() {
    let server = MockServer::start().await;
    respond_always(&server, ResponseTemplate::new(500).set_body_string("oops")).await;
    let config = PipefyConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .endpoint(Endpoint::new(format!("{}/graphql", server.uri())).unwrap())
        .build()
        .unwrap();
    let client = PipefyClient::new(&config).unwrap();

    let result = client.pipe(1, None, None).await;

    assert!(result.is_err());
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_network_error_is_retried_and_reported() {
    // Nothing listens on port 1.
    let config = PipefyConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .endpoint(Endpoint::new("http://127.0.0.1:1/graphql").unwrap())
        .retry_attempts(2)
        .retry_delay(Duration::ZERO)
        .build()
        .unwrap();
    let client = PipefyClient::new(&config).unwrap();

    let result = client.card(1, None, None).await;

    assert!(matches!(result, Err(PipefyError::Network(_))));
}

// ============================================================================
// Classification Tests
// ============================================================================

#[tokio::test]
async fn test_non_json_body_is_malformed_response() {
    let server = MockServer::start().await;
    respond_always(&server, ResponseTemplate::new(200).set_body_string("not json")).await;
    let client = create_client(&server, 1);

    let result = client.card(1, None, None).await;

    assert!(matches!(
        result,
        Err(PipefyError::MalformedResponse { ref body }) if body == "not json"
    ));
}

#[tokio::test]
async fn test_error_description_is_preferred() {
    let server = MockServer::start().await;
    respond_always(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_token",
            "error_description": "The access token is invalid"
        })),
    )
    .await;
    let client = create_client(&server, 1);

    let result = client.card(1, None, None).await;

    assert!(matches!(
        result,
        Err(PipefyError::Api { ref message }) if message == "The access token is invalid"
    ));
}

#[tokio::test]
async fn test_error_without_description_uses_error_text() {
    let server = MockServer::start().await;
    respond_always(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"error": "Permission denied"})),
    )
    .await;
    let client = create_client(&server, 1);

    let result = client.card(1, None, None).await;

    assert!(matches!(
        result,
        Err(PipefyError::Api { ref message }) if message == "Permission denied"
    ));
}

#[tokio::test]
async fn test_non_200_status_with_json_body() {
    let server = MockServer::start().await;
    respond_always(
        &server,
        ResponseTemplate::new(503).set_body_json(json!({"data": null})),
    )
    .await;
    let client = create_client(&server, 1);

    let result = client.card(1, None, None).await;

    assert!(matches!(
        result,
        Err(PipefyError::Api { ref message }) if message == "HTTP 503 returned by Pipefy"
    ));
}

#[tokio::test]
async fn test_html_doctype_in_envelope_is_rate_limited() {
    let server = MockServer::start().await;
    respond_always(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "data": "<!DOCTYPE html><html><body>Too many requests</body></html>"
        })),
    )
    .await;
    let client = create_client(&server, 2);

    let result = client.card(1, None, None).await;

    assert!(matches!(result, Err(ref e) if e.is_rate_limited()));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Error HTTP 429 - Too Many Requests"
    );
    assert_eq!(request_count(&server).await, 2);
}

// ============================================================================
// Header Tests
// ============================================================================

#[tokio::test]
async fn test_per_call_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "Bearer other-token"))
        .and(header("X-Trace-Id", "abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"card": {"id": "7"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = create_client(&server, 1);

    let mut headers = HashMap::new();
    headers.insert("authorization".to_string(), "Bearer other-token".to_string());
    headers.insert("X-Trace-Id".to_string(), "abc".to_string());

    let card = client.card(7, None, Some(headers)).await.unwrap();

    assert_eq!(card["id"], "7");
}

#[tokio::test]
async fn test_without_per_call_headers_defaults_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"pipe": {"id": "1"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = create_client(&server, 1);

    let pipe = client.pipe(1, None, None).await.unwrap();

    assert_eq!(pipe["id"], "1");
}

// ============================================================================
// Document Validation Tests
// ============================================================================

#[tokio::test]
async fn test_unclosed_raw_document_is_not_sent() {
    let server = MockServer::start().await;
    respond_always(&server, ResponseTemplate::new(200).set_body_json(json!({"data": {}}))).await;
    let client = create_client(&server, 3);

    let result = client.execute("mutation { deleteCard(input: { id: 1 }) { success }", None).await;

    assert!(matches!(result, Err(PipefyError::InvalidQuery(_))));
    assert_eq!(request_count(&server).await, 0);
}
