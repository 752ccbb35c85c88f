//! Contact API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{register_user, TestApp};

#[tokio::test]
async fn test_submit_message_is_public() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/contact",
            json!({"name": "Grace", "email": "grace@example.com", "message": "Hi there"}),
            None,
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    assert_eq!(
        response.body["message"],
        "Thank you for your message! We will get back to you soon."
    );
    let data = &response.body["data"];
    assert_eq!(data["name"], "Grace");
    assert_eq!(data["email"], "grace@example.com");
    assert_eq!(data["read"], false);
}

#[tokio::test]
async fn test_submit_message_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post("/api/contact", json!({"name": "Grace"}), None)
        .await;

    assert_failure!(
        response,
        StatusCode::BAD_REQUEST,
        "Please provide all required fields"
    );
}

#[tokio::test]
async fn test_submit_message_malformed_email() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/contact",
            json!({"name": "Grace", "email": "grace-at-example", "message": "Hi"}),
            None,
        )
        .await;

    assert_failure!(
        response,
        StatusCode::BAD_REQUEST,
        "Please provide a valid email address"
    );
}

#[tokio::test]
async fn test_list_messages_requires_token() {
    let app = TestApp::new();

    let response = app.get("/api/contact").await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_messages_newest_first() {
    let app = TestApp::new();
    let ada = register_user(&app, "ada").await;

    for name in ["First", "Second"] {
        app.post(
            "/api/contact",
            json!({"name": name, "email": "someone@example.com", "message": "Hello"}),
            None,
        )
        .await;
    }

    let response = app.get_auth("/api/contact", &ada.token).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["count"], 2);
    assert_eq!(response.body["data"][0]["name"], "Second");
    assert_eq!(response.body["data"][1]["name"], "First");
}
