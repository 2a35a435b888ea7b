// tests/common/auth_helper.rs

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use uuid::Uuid;

use crate::common::request::{create_request, send};

pub const TEST_PASSWORD: &str = "Secur3Password";

#[derive(Debug, Clone)]
pub struct TestUser {
    pub user_id: Uuid,
    pub email: String,
    pub token: String,
}

/// 指定ロールでユーザー登録してログインする
pub async fn create_and_authenticate_user(app: &Router, username: &str, role: &str) -> TestUser {
    let email = format!("{}@example.com", username);

    let (status, body) = send(
        app,
        create_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "email": email,
                "username": username,
                "password": TEST_PASSWORD,
                "full_name": format!("{} tester", username),
                "role": role
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

    let token = login(app, &email, TEST_PASSWORD).await;
    TestUser {
        user_id: Uuid::parse_str(body["id"].as_str().unwrap()).unwrap(),
        email,
        token,
    }
}

pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        create_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["access_token"].as_str().unwrap().to_string()
}

pub async fn create_admin(app: &Router) -> TestUser {
    create_and_authenticate_user(app, "admin_user", "admin").await
}
