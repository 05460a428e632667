//! Integration tests for signup and login.

mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};

#[tokio::test]
async fn test_signup_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
                "confirm_password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.field("user_id"), "1");
    assert_eq!(response.field("username"), "alice");
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let app = helpers::TestApp::new();
    app.signup("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "alice",
                "password": "different456",
                "confirm_password": "different456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.field("error"), "CONFLICT");
}

#[tokio::test]
async fn test_signup_rejects_short_username() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "ab",
                "password": "password123",
                "confirm_password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.field("error"), "VALIDATION");
}

#[tokio::test]
async fn test_signup_rejects_password_mismatch() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/signup",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
                "confirm_password": "password456",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.field("error"), "VALIDATION");
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.signup("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.field("user_id"), "1");
    assert_eq!(response.field("username"), "alice");
    assert!(!response.field("access_token").is_empty());
    assert!(!response.field("refresh_token").is_empty());

    let access_expires: DateTime<Utc> = response
        .field("access_expires_at")
        .parse()
        .expect("access_expires_at should be a timestamp");
    let refresh_expires: DateTime<Utc> = response
        .field("refresh_expires_at")
        .parse()
        .expect("refresh_expires_at should be a timestamp");
    assert!(access_expires < refresh_expires);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.field("error"), "NOT_FOUND");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();
    app.signup("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.field("error"), "INVALID_CREDENTIAL");
}

#[tokio::test]
async fn test_login_rejects_empty_username() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "username": "",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.field("error"), "VALIDATION");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.field("status"), "ok");
}
