// tests/integration/auth.rs

use axum::http::StatusCode;
use hr_backend::config::app::InitialAdmin;
use hr_backend::config::AppConfig;
use serde_json::json;

use crate::common::{
    app_helper::{setup_app, setup_app_with_config},
    auth_helper::{create_and_authenticate_user, login, TEST_PASSWORD},
    request::{create_request, get, send},
};

fn register_body(username: &str, role: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "email": format!("{}@example.com", username),
        "username": username,
        "password": TEST_PASSWORD,
    });
    if let Some(role) = role {
        body["role"] = json!(role);
    }
    body
}

#[tokio::test]
async fn test_register_defaults_to_employee_role() {
    let app = setup_app().await;

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/auth/register",
            None,
            Some(register_body("alice", None)),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["role"], "employee");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let app = setup_app().await;
    create_and_authenticate_user(&app.router, "bob", "employee").await;

    let mut duplicate = register_body("bob", None);
    duplicate["username"] = json!("bob_again");
    let (status, body) = send(
        &app.router,
        create_request("POST", "/api/auth/register", None, Some(duplicate)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "duplicate_key");
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn test_register_weak_password_is_rejected() {
    let app = setup_app().await;

    let mut body = register_body("weak", None);
    body["password"] = json!("alllowercase");
    let (status, body) = send(
        &app.router,
        create_request("POST", "/api/auth/register", None, Some(body)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_register_privileged_role_forbidden_without_opt_in() {
    let mut config = AppConfig::for_testing();
    config.auth.allow_self_assigned_roles = false;
    let app = setup_app_with_config(config).await;

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/auth/register",
            None,
            Some(register_body("mallory", Some("admin"))),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error_type"], "forbidden");
}

#[tokio::test]
async fn test_login_and_me() {
    let app = setup_app().await;
    let user = create_and_authenticate_user(&app.router, "carol", "manager").await;

    let (status, body) = get(&app.router, "/api/auth/me", Some(&user.token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.user_id.to_string());
    assert_eq!(body["role"], "manager");
}

#[tokio::test]
async fn test_login_response_shape() {
    let app = setup_app().await;
    create_and_authenticate_user(&app.router, "dave", "employee").await;

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "dave@example.com", "password": TEST_PASSWORD })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["expires_in"].as_i64().unwrap() > 0);
    assert_eq!(body["user"]["username"], "dave");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let app = setup_app().await;
    create_and_authenticate_user(&app.router, "erin", "employee").await;

    let (wrong_status, wrong_body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "erin@example.com", "password": "WrongPassw0rd" })),
        ),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": TEST_PASSWORD })),
        ),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["message"], unknown_body["message"]);
}

#[tokio::test]
async fn test_me_requires_valid_token() {
    let app = setup_app().await;

    let (missing, _) = get(&app.router, "/api/auth/me", None).await;
    let (garbage, _) = get(&app.router, "/api/auth/me", Some("not.a.token")).await;

    assert_eq!(missing, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_initial_admin_is_created_and_can_log_in() {
    let app = setup_app().await;
    let admin = InitialAdmin {
        email: "root@example.com".to_string(),
        username: "root".to_string(),
        password: TEST_PASSWORD.to_string(),
    };

    app.state.auth_service.ensure_initial_admin(&admin).await.unwrap();
    // 二回目は既存ユーザーの昇格のみ
    app.state.auth_service.ensure_initial_admin(&admin).await.unwrap();

    let token = login(&app.router, "root@example.com", TEST_PASSWORD).await;
    let (status, body) = get(&app.router, "/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "admin");
}
