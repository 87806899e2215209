//! Authentication test helpers

use axum_test::TestServer;

/// A signed-up test user: bearer token plus the assigned code
pub struct TestUser {
    pub token: String,
    pub code: String,
}

/// Sign up a user through the API and return their token and code
pub async fn signup_user(server: &TestServer, gmail: &str) -> TestUser {
    let response = server
        .post("/api/users/signup")
        .json(&serde_json::json!({
            "gmail": gmail,
            "password": "password123",
        }))
        .await;

    let body: serde_json::Value = response.json();
    TestUser {
        token: body["token"].as_str().expect("signup token").to_string(),
        code: body["code"].as_str().expect("signup code").to_string(),
    }
}
