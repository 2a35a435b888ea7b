// tests/integration/training.rs

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{
    app_helper::setup_app,
    auth_helper::{create_admin, create_and_authenticate_user},
    request::{get, post, put},
    test_data::{create_employee, create_training},
};

fn training_payload(employee_id: Uuid, due_date: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "title": "Information security basics",
        "training_type": "mandatory",
        "provider": "Internal",
        "due_date": due_date,
        "duration_hours": 4.0
    })
}

#[tokio::test]
async fn test_create_training_defaults() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let (status, body) = post(
        &app.router,
        "/api/training",
        &admin.token,
        training_payload(employee, "2999-12-31"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "not_started");
    assert_eq!(body["data"]["progress_percentage"], 0.0);
    assert!(body["data"]["completion_date"].is_null());
}

#[tokio::test]
async fn test_overdue_training_reads_as_expired() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let record = create_training(
        &app.router,
        &admin.token,
        training_payload(employee, "2000-01-01"),
    )
    .await;

    let (status, body) = get(
        &app.router,
        &format!("/api/training/{}", record),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "expired");

    let (_, body) = get(
        &app.router,
        &format!("/api/training?employee_id={}", employee),
        None,
    )
    .await;
    assert_eq!(body["data"][0]["status"], "expired");

    // 期限切れからは完了にできない
    let (status, _) = put(
        &app.router,
        &format!("/api/training/{}", record),
        &admin.token,
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_progress_and_completion() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let record = create_training(
        &app.router,
        &admin.token,
        training_payload(employee, "2999-12-31"),
    )
    .await;
    let uri = format!("/api/training/{}", record);

    let (status, body) = put(
        &app.router,
        &uri,
        &admin.token,
        json!({ "status": "in_progress", "progress_percentage": 40.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "in_progress");
    assert_eq!(body["data"]["progress_percentage"], 40.0);

    let (status, body) = put(
        &app.router,
        &uri,
        &admin.token,
        json!({ "status": "completed", "score": 92.5 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["progress_percentage"], 100.0);
    assert_eq!(body["data"]["score"], 92.5);
    assert_eq!(
        body["data"]["completion_date"],
        Utc::now().date_naive().to_string()
    );

    let (status, _) = put(
        &app.router,
        &uri,
        &admin.token,
        json!({ "status": "in_progress" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_progress_out_of_range_is_rejected() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let record = create_training(
        &app.router,
        &admin.token,
        training_payload(employee, "2999-12-31"),
    )
    .await;

    let (status, body) = put(
        &app.router,
        &format!("/api/training/{}", record),
        &admin.token,
        json!({ "progress_percentage": 150.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["validation_errors"]["progress_percentage"].is_array());
}

#[tokio::test]
async fn test_employee_role_cannot_manage_training() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let worker = create_and_authenticate_user(&app.router, "worker", "employee").await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let (status, _) = post(
        &app.router,
        "/api/training",
        &worker.token,
        training_payload(employee, "2999-12-31"),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_completed_training_keeps_full_progress() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let record = create_training(
        &app.router,
        &admin.token,
        training_payload(employee, "2999-12-31"),
    )
    .await;
    let uri = format!("/api/training/{}", record);

    let (status, _) = put(
        &app.router,
        &uri,
        &admin.token,
        json!({ "status": "completed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = put(
        &app.router,
        &uri,
        &admin.token,
        json!({ "progress_percentage": 10.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");

    let (status, _) = put(
        &app.router,
        &uri,
        &admin.token,
        json!({ "completion_date": "2020-01-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app.router, &uri, Some(&admin.token)).await;
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["progress_percentage"], 100.0);

    // 進捗以外の項目は引き続き更新できる
    let (status, body) = put(
        &app.router,
        &uri,
        &admin.token,
        json!({ "notes": "Certificate filed" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["progress_percentage"], 100.0);
}

#[tokio::test]
async fn test_expired_training_progress_is_frozen() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let record = create_training(
        &app.router,
        &admin.token,
        training_payload(employee, "2000-01-01"),
    )
    .await;

    let (status, _) = put(
        &app.router,
        &format!("/api/training/{}", record),
        &admin.token,
        json!({ "progress_percentage": 50.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
