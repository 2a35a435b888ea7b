// tests/integration/documents.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{
    app_helper::setup_app,
    auth_helper::{create_admin, create_and_authenticate_user},
    request::{get, post, put},
    test_data::{create_document, create_employee, document_payload},
};

#[tokio::test]
async fn test_upload_document_defaults() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let (status, body) = post(
        &app.router,
        "/api/documents",
        &admin.token,
        document_payload(employee),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "active");
    assert_eq!(body["data"]["version"], "1.0");
    assert_eq!(body["data"]["file_name"], "contract.pdf");
    assert!(body["data"]["upload_date"].is_string());
    assert!(body["data"]["archived_date"].is_null());
}

#[tokio::test]
async fn test_employee_role_can_upload_but_not_update() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let worker = create_and_authenticate_user(&app.router, "worker", "employee").await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let document = create_document(&app.router, &worker.token, document_payload(employee)).await;

    let (status, _) = put(
        &app.router,
        &format!("/api/documents/{}", document),
        &worker.token,
        json!({ "title": "Renamed" }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_document_reads_as_expired() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let mut payload = document_payload(employee);
    payload["expiry_date"] = json!("2000-01-01");
    let document = create_document(&app.router, &admin.token, payload).await;

    let (status, body) = get(
        &app.router,
        &format!("/api/documents/{}", document),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "expired");

    // 期限切れから有効には戻せない
    let (status, _) = put(
        &app.router,
        &format!("/api/documents/{}", document),
        &admin.token,
        json!({ "status": "pending_approval" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_archive_document() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let document = create_document(&app.router, &admin.token, document_payload(employee)).await;
    let uri = format!("/api/documents/{}/archive", document);

    let (status, body) = post(&app.router, &uri, &admin.token, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "archived");
    assert!(body["data"]["archived_date"].is_string());

    let (status, _) = post(&app.router, &uri, &admin.token, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_document_payloads() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let mut payload = document_payload(employee);
    payload["file_path"] = json!("");
    let (status, body) = post(&app.router, "/api/documents", &admin.token, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["validation_errors"]["file_path"].is_array());

    let mut payload = document_payload(employee);
    payload["document_type"] = json!("selfie");
    let (status, _) = post(&app.router, "/api/documents", &admin.token, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_documents_filter_by_employee() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let first = create_employee(&app.router, &admin.token, "EMP001").await;
    let second = create_employee(&app.router, &admin.token, "EMP002").await;
    create_document(&app.router, &admin.token, document_payload(first)).await;
    create_document(&app.router, &admin.token, document_payload(second)).await;
    create_document(&app.router, &admin.token, document_payload(second)).await;

    let (status, body) = get(
        &app.router,
        &format!("/api/documents?employee_id={}", second),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}
