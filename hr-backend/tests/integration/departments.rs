// tests/integration/departments.rs

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::common::{
    app_helper::setup_app,
    auth_helper::{create_admin, create_and_authenticate_user},
    request::{create_request, get, post, put, send},
    test_data::{create_department, create_employee},
};

#[tokio::test]
async fn test_department_list_is_public_and_active_only() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    create_department(&app.router, &admin.token, "Engineering").await;
    let legacy = create_department(&app.router, &admin.token, "Legacy").await;

    let (status, body) = put(
        &app.router,
        &format!("/api/departments/{}", legacy),
        &admin.token,
        json!({ "is_active": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], false);

    let (status, body) = get(&app.router, "/api/departments", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Engineering"]);

    // 無効化された部署もIDでは取得できる
    let (status, body) = get(&app.router, &format!("/api/departments/{}", legacy), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Legacy");
}

#[tokio::test]
async fn test_duplicate_department_name_is_rejected() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    create_department(&app.router, &admin.token, "Finance").await;

    let (status, body) = post(
        &app.router,
        "/api/departments",
        &admin.token,
        json!({ "name": "Finance" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "duplicate_key");
    assert_eq!(body["message"], "Department name already exists");
}

#[tokio::test]
async fn test_department_manager_must_exist() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;

    let (status, _) = post(
        &app.router,
        "/api/departments",
        &admin.token,
        json!({ "name": "Support", "manager_id": Uuid::new_v4() }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let manager = create_employee(&app.router, &admin.token, "EMP900").await;
    let (status, body) = post(
        &app.router,
        "/api/departments",
        &admin.token,
        json!({ "name": "Support", "manager_id": manager }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["manager_id"], manager.to_string());
}

#[tokio::test]
async fn test_department_writes_require_hr_role() {
    let app = setup_app().await;
    let manager = create_and_authenticate_user(&app.router, "line_manager", "manager").await;

    let (status, _) = post(
        &app.router,
        "/api/departments",
        &manager.token,
        json!({ "name": "Shadow IT" }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let hr = create_and_authenticate_user(&app.router, "hr_person", "hr_manager").await;
    let (status, _) = post(
        &app.router,
        "/api/departments",
        &hr.token,
        json!({ "name": "People" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_department_create_requires_authentication() {
    let app = setup_app().await;

    let (status, _) = send(
        &app.router,
        create_request(
            "POST",
            "/api/departments",
            None,
            Some(json!({ "name": "Anonymous" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_missing_department_is_not_found() {
    let app = setup_app().await;

    let (status, body) = get(
        &app.router,
        &format!("/api/departments/{}", Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}
