//! OpenAI adapter against a mock completions endpoint.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use dealdesk::adapter::outbound::llm::OpenAi;
use dealdesk::error::{Error, OracleError};
use dealdesk::port::Llm;

fn client(server: &MockServer) -> OpenAi {
    OpenAi::new(
        "test-key",
        "gpt-3.5-turbo-instruct",
        server.base_url(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn completion_text_is_trimmed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/completions")
                .header("authorization", "Bearer test-key")
                .json_body(json!({
                    "model": "gpt-3.5-turbo-instruct",
                    "prompt": "100N,150Y,200",
                    "max_tokens": 60
                }));
            then.status(200).json_body(json!({
                "id": "cmpl-1",
                "object": "text_completion",
                "choices": [{"text": "\n\nY", "index": 0, "finish_reason": "stop"}]
            }));
        })
        .await;

    let reply = client(&server).complete("100N,150Y,200", 60).await.unwrap();

    mock.assert_async().await;
    assert_eq!(reply, "Y");
}

#[tokio::test]
async fn empty_choices_are_an_oracle_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let err = client(&server).complete("200", 60).await.unwrap_err();
    assert!(matches!(err, Error::Oracle(OracleError::EmptyCompletion)));
    assert!(!err.is_validation());
}

#[tokio::test]
async fn unauthorized_is_reported_as_such() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/completions");
            then.status(401)
                .json_body(json!({"error": {"message": "Incorrect API key provided"}}));
        })
        .await;

    let err = client(&server).complete("200", 60).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Oracle(OracleError::Unauthorized { status: 401 })
    ));
}

#[tokio::test]
async fn server_error_carries_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/completions");
            then.status(503);
        })
        .await;

    let err = client(&server).complete("200", 60).await.unwrap_err();
    assert!(matches!(err, Error::Oracle(OracleError::Status { status: 503 })));
    assert!(!err.is_validation());
}

#[tokio::test]
async fn malformed_body_is_an_http_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/completions");
            then.status(200).body("not json");
        })
        .await;

    let err = client(&server).complete("200", 60).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
