// tests/integration/performance.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{
    app_helper::setup_app,
    auth_helper::{create_admin, create_and_authenticate_user},
    request::{get, post, put},
    test_data::{
        create_employee, create_employee_with, create_review, employee_payload, review_payload,
    },
};

#[tokio::test]
async fn test_create_review_defaults() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let reviewer = create_employee(&app.router, &admin.token, "EMP002").await;

    let (status, body) = post(
        &app.router,
        "/api/performance",
        &admin.token,
        review_payload(employee, reviewer),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["overall_rating"], 4);
    assert_eq!(body["data"]["overall_rating_label"], "4 - Good");
    assert_eq!(body["data"]["is_completed"], false);
    assert_eq!(body["data"]["employee_acknowledged"], false);
}

#[tokio::test]
async fn test_create_review_validation() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let reviewer = create_employee(&app.router, &admin.token, "EMP002").await;

    // 評価は 1..=5
    let mut payload = review_payload(employee, reviewer);
    payload["overall_rating"] = json!(6);
    let (status, _) = post(&app.router, "/api/performance", &admin.token, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut payload = review_payload(employee, reviewer);
    payload["review_period_start"] = json!("2024-12-31");
    let (status, _) = post(&app.router, "/api/performance", &admin.token, payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app.router,
        "/api/performance",
        &admin.token,
        review_payload(employee, employee),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_employee_role_cannot_create_review() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let worker = create_and_authenticate_user(&app.router, "worker", "employee").await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let reviewer = create_employee(&app.router, &admin.token, "EMP002").await;

    let (status, _) = post(
        &app.router,
        "/api/performance",
        &worker.token,
        review_payload(employee, reviewer),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_acknowledge_requires_completed_review() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let reviewer = create_employee(&app.router, &admin.token, "EMP002").await;
    let review = create_review(&app.router, &admin.token, employee, reviewer).await;

    let (status, _) = post(
        &app.router,
        &format!("/api/performance/{}/acknowledge", review),
        &admin.token,
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 未完了のまま確認済みにする更新も拒否される
    let (status, _) = put(
        &app.router,
        &format!("/api/performance/{}", review),
        &admin.token,
        json!({ "employee_acknowledged": true }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = put(
        &app.router,
        &format!("/api/performance/{}", review),
        &admin.token,
        json!({ "is_completed": true, "goals": "Lead the Q3 migration" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_completed"], true);
    assert_eq!(body["data"]["goals"], "Lead the Q3 migration");

    let (status, body) = post(
        &app.router,
        &format!("/api/performance/{}/acknowledge", review),
        &admin.token,
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["employee_acknowledged"], true);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_employee_acknowledges_only_own_review() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let worker = create_and_authenticate_user(&app.router, "worker", "employee").await;

    let mut payload = employee_payload("EMP001");
    payload["user_id"] = json!(worker.user_id);
    let own = create_employee_with(&app.router, &admin.token, payload).await;
    let other = create_employee(&app.router, &admin.token, "EMP002").await;
    let reviewer = create_employee(&app.router, &admin.token, "EMP003").await;

    let own_review = create_review(&app.router, &admin.token, own, reviewer).await;
    let other_review = create_review(&app.router, &admin.token, other, reviewer).await;
    for review in [own_review, other_review] {
        let (status, _) = put(
            &app.router,
            &format!("/api/performance/{}", review),
            &admin.token,
            json!({ "is_completed": true }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = post(
        &app.router,
        &format!("/api/performance/{}/acknowledge", other_review),
        &worker.token,
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = post(
        &app.router,
        &format!("/api/performance/{}/acknowledge", own_review),
        &worker.token,
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["employee_acknowledged"], true);
}

#[tokio::test]
async fn test_list_reviews_filter_by_employee() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let first = create_employee(&app.router, &admin.token, "EMP001").await;
    let second = create_employee(&app.router, &admin.token, "EMP002").await;
    create_review(&app.router, &admin.token, first, second).await;
    create_review(&app.router, &admin.token, second, first).await;

    let (status, body) = get(
        &app.router,
        &format!("/api/performance?employee_id={}", first),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let reviews = body["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["reviewer_id"], second.to_string());
}
