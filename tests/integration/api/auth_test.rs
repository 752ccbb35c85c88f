//! Authentication API integration tests
//!
//! Tests for the user endpoints including register, login, and current user.

use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{auth_header, register_user, TestApp, TEST_PASSWORD, TEST_SECRET};
use portfolio_api::backend::auth::TokenService;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/users/register",
            json!({"username": "ada", "email": "ada@example.com", "password": "secret123"}),
            None,
        )
        .await;

    assert_status!(response, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["username"], "ada");
    assert_eq!(data["email"], "ada@example.com");
    assert!(data["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(data.get("password").is_none());
    assert!(data.get("passwordHash").is_none());

    let tokens = TokenService::new(TEST_SECRET);
    let subject = tokens.verify(data["token"].as_str().unwrap()).unwrap();
    assert_eq!(subject.to_string(), data["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/users/register",
            json!({"username": "ada", "password": "secret123"}),
            None,
        )
        .await;

    assert_failure!(
        response,
        StatusCode::BAD_REQUEST,
        "Please provide all required fields"
    );
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/users/register",
            json!({"username": "ada", "email": "ada@example.com", "password": "12345"}),
            None,
        )
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_contains!(response.body["message"].as_str().unwrap(), "6");
}

#[tokio::test]
async fn test_register_malformed_email() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/users/register",
            json!({"username": "ada", "email": "not-an-email", "password": "secret123"}),
            None,
        )
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicate_email_or_username() {
    let app = TestApp::new();
    register_user(&app, "ada").await;

    let same_email = app
        .post(
            "/api/users/register",
            json!({"username": "other", "email": "ada@example.com", "password": "secret123"}),
            None,
        )
        .await;
    assert_failure!(
        same_email,
        StatusCode::BAD_REQUEST,
        "User already exists with that email or username"
    );

    let same_username = app
        .post(
            "/api/users/register",
            json!({"username": "ada", "email": "new@example.com", "password": "secret123"}),
            None,
        )
        .await;
    assert_status!(same_username, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let user = register_user(&app, "ada").await;

    let response = app
        .post(
            "/api/users/login",
            json!({"email": "ada@example.com", "password": TEST_PASSWORD}),
            None,
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], user.id.as_str());
    assert!(response.body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    register_user(&app, "ada").await;

    let wrong_password = app
        .post(
            "/api/users/login",
            json!({"email": "ada@example.com", "password": "wrong-password"}),
            None,
        )
        .await;
    let unknown_email = app
        .post(
            "/api/users/login",
            json!({"email": "nobody@example.com", "password": TEST_PASSWORD}),
            None,
        )
        .await;

    assert_failure!(wrong_password, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert_failure!(unknown_email, StatusCode::UNAUTHORIZED, "Invalid credentials");
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post("/api/users/login", json!({"email": "ada@example.com"}), None)
        .await;

    assert_failure!(
        response,
        StatusCode::BAD_REQUEST,
        "Please provide email and password"
    );
}

#[tokio::test]
async fn test_get_me_with_valid_token() {
    let app = TestApp::new();
    let user = register_user(&app, "ada").await;

    let response = app.get_auth("/api/users/me", &user.token).await;

    assert_status!(response, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["id"], user.id.as_str());
    assert_eq!(data["username"], "ada");
    assert_eq!(data["email"], "ada@example.com");
    assert!(data.get("createdAt").is_some());
    assert!(data.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_get_me_without_token() {
    let app = TestApp::new();

    let response = app.get("/api/users/me").await;

    assert_failure!(
        response,
        StatusCode::UNAUTHORIZED,
        "Not authorized, no token provided"
    );
}

#[tokio::test]
async fn test_get_me_with_non_bearer_scheme() {
    let app = TestApp::new();
    let user = register_user(&app, "ada").await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/users/me")
        .header(header::AUTHORIZATION, format!("Basic {}", user.token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_failure!(
        response,
        StatusCode::UNAUTHORIZED,
        "Not authorized, no token provided"
    );
}

#[tokio::test]
async fn test_get_me_with_tampered_token() {
    let app = TestApp::new();
    let user = register_user(&app, "ada").await;

    let forged = TokenService::new("some-other-secret")
        .issue(user.id.parse().unwrap())
        .unwrap();
    let response = app.get_auth("/api/users/me", &forged).await;

    assert_failure!(
        response,
        StatusCode::UNAUTHORIZED,
        "Not authorized, token failed"
    );
}

#[tokio::test]
async fn test_get_me_for_unknown_user() {
    let app = TestApp::new();

    let token = TokenService::new(TEST_SECRET)
        .issue(uuid::Uuid::new_v4())
        .unwrap();
    let request = Request::builder()
        .uri("/api/users/me")
        .header(header::AUTHORIZATION, auth_header(&token))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_failure!(response, StatusCode::UNAUTHORIZED, "User not found");
}
