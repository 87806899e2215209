//! Auth API integration tests

mod common;

use axum::http::StatusCode;
use common::{create_test_server, signup_user};

#[tokio::test]
async fn test_signup_success() {
    let server = create_test_server().await;

    let response = server
        .post("/api/users/signup")
        .json(&serde_json::json!({
            "gmail": "user1@test.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_some());

    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    assert_eq!(body["user"]["gmail"], "user1@test.com");
}

#[tokio::test]
async fn test_signup_duplicate_gmail() {
    let server = create_test_server().await;
    signup_user(&server, "user1@test.com").await;

    let response = server
        .post("/api/users/signup")
        .json(&serde_json::json!({
            "gmail": "user1@test.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let server = create_test_server().await;

    let response = server
        .post("/api/users/signup")
        .json(&serde_json::json!({
            "gmail": "",
            "password": "",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server().await;
    let user = signup_user(&server, "user1@test.com").await;

    let response = server
        .post("/api/users/login")
        .json(&serde_json::json!({
            "gmail": "user1@test.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_some());
    assert_eq!(body["code"], user.code.as_str());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = create_test_server().await;
    signup_user(&server, "user1@test.com").await;

    let response = server
        .post("/api/users/login")
        .json(&serde_json::json!({
            "gmail": "user1@test.com",
            "password": "wrongpassword",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = create_test_server().await;

    let response = server
        .post("/api/users/login")
        .json(&serde_json::json!({
            "gmail": "nobody@test.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let server = create_test_server().await;
    let user = signup_user(&server, "user1@test.com").await;

    let response = server
        .get("/api/users/me")
        .authorization_bearer(&user.token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["gmail"], "user1@test.com");
    assert_eq!(body["code"], user.code.as_str());
}

#[tokio::test]
async fn test_me_requires_token() {
    let server = create_test_server().await;

    let response = server.get("/api/users/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
