//! End-to-end tests for the contact submission pipeline

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{expect_json, TestApp};
use folio_delivery::SinkError;

#[tokio::test]
async fn test_valid_submission_is_delivered() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/v1/contact",
            json!({
                "name": "Jane",
                "email": "jane@x.com",
                "message": "Hello there friend"
            }),
        )
        .await;

    let body = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(body["channel"], "mock");
    assert!(body["message_id"].as_str().unwrap().starts_with("mock-"));

    let delivered = app.sink.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Jane");
    assert_eq!(delivered[0].email, "jane@x.com");
    assert_eq!(delivered[0].message, "Hello there friend");
}

#[tokio::test]
async fn test_invalid_submission_reports_every_field() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/v1/contact",
            json!({
                "name": "   ",
                "email": "a@b",
                "message": "short"
            }),
        )
        .await;

    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["fields"]["name"], "Name is required");
    assert_eq!(body["fields"]["email"], "Please enter a valid email");
    assert_eq!(
        body["fields"]["message"],
        "Message must be at least 10 characters long"
    );

    // Nothing reached the sink
    assert_eq!(app.sink.delivery_count(), 0);
}

#[tokio::test]
async fn test_empty_fields_use_required_messages() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/v1/contact",
            json!({"name": "", "email": "", "message": ""}),
        )
        .await;

    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["fields"]["email"], "Email is required");
    assert_eq!(body["fields"]["message"], "Message is required");
}

#[tokio::test]
async fn test_sink_failure_is_a_transport_error() {
    let app = TestApp::new();
    app.sink
        .fail_with(SinkError::Store("primary store unavailable".to_string()));

    let response = app
        .post_json(
            "/v1/contact",
            json!({
                "name": "Jane",
                "email": "jane@x.com",
                "message": "Hello there friend"
            }),
        )
        .await;

    let body = expect_json(response, StatusCode::BAD_GATEWAY).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Failed to send message"));
}

#[tokio::test]
async fn test_retry_after_failure_succeeds() {
    let app = TestApp::new();
    app.sink
        .fail_with(SinkError::Http("endpoint down".to_string()));

    let payload = json!({
        "name": "Jane",
        "email": "jane@x.com",
        "message": "Hello there friend"
    });

    let response = app.post_json("/v1/contact", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    app.sink.recover();
    let response = app.post_json("/v1/contact", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.sink.delivery_count(), 1);
}
