//! Authentication test helpers
//!
//! Register users through the public endpoint and keep their tokens.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::app::TestApp;

/// Default password for registered test users
pub const TEST_PASSWORD: &str = "secret123";

/// A registered user and the token issued at registration
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Register `name` with `name@example.com`
pub async fn register_user(app: &TestApp, name: &str) -> TestUser {
    let email = format!("{}@example.com", name);
    let response = app
        .post(
            "/api/users/register",
            json!({"username": name, "email": email, "password": TEST_PASSWORD}),
            None,
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "registration failed: {}",
        response.body
    );

    let data = &response.body["data"];
    TestUser {
        id: data["id"].as_str().expect("id").to_string(),
        username: data["username"].as_str().expect("username").to_string(),
        email: data["email"].as_str().expect("email").to_string(),
        token: data["token"].as_str().expect("token").to_string(),
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
