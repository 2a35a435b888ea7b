// tests/integration/absences.rs

use axum::http::StatusCode;
use hr_backend::domain::absence_status::AbsenceStatus;
use hr_backend::repository::absence_repository::AbsenceRepository;
use serde_json::json;
use uuid::Uuid;

use crate::common::{
    app_helper::setup_app,
    auth_helper::{create_admin, create_and_authenticate_user},
    request::{create_request, get, post, put, send},
    test_data::{
        absence_payload, create_absence, create_employee, create_employee_with, employee_payload,
    },
};

#[tokio::test]
async fn test_create_absence_starts_pending() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let mut payload = absence_payload(employee);
    payload["status"] = json!("approved");
    let (status, body) = post(&app.router, "/api/absences", &admin.token, payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["absence_type"], "annual_leave");
    assert!(body["data"]["approved_by"].is_null());
}

#[tokio::test]
async fn test_create_absence_rejects_reversed_dates() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;

    let mut payload = absence_payload(employee);
    payload["start_date"] = json!("2024-07-10");
    payload["end_date"] = json!("2024-07-01");
    let (status, body) = post(&app.router, "/api/absences", &admin.token, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
}

#[tokio::test]
async fn test_create_absence_for_unknown_employee() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;

    let (status, _) = post(
        &app.router,
        "/api/absences",
        &admin.token,
        absence_payload(Uuid::new_v4()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_absences_is_public_and_filterable() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let first = create_employee(&app.router, &admin.token, "EMP001").await;
    let second = create_employee(&app.router, &admin.token, "EMP002").await;
    create_absence(&app.router, &admin.token, first).await;
    create_absence(&app.router, &admin.token, second).await;

    let (status, body) = get(&app.router, "/api/absences", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = get(
        &app.router,
        &format!("/api/absences?employee_id={}", second),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let filtered = body["data"].as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["employee_id"], second.to_string());
}

#[tokio::test]
async fn test_approve_with_explicit_approver() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let approver = create_employee(&app.router, &admin.token, "EMP002").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    let (status, body) = post(
        &app.router,
        &format!("/api/absences/{}/approve", absence),
        &admin.token,
        json!({ "approver_id": approver }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "approved");
    assert_eq!(body["data"]["approved_by"], approver.to_string());
    assert!(body["data"]["approved_at"].is_string());
}

#[tokio::test]
async fn test_approve_without_body_uses_linked_employee() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let manager = create_and_authenticate_user(&app.router, "line_manager", "manager").await;

    let mut payload = employee_payload("MGR001");
    payload["user_id"] = json!(manager.user_id);
    let manager_employee = create_employee_with(&app.router, &admin.token, payload).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            &format!("/api/absences/{}/approve", absence),
            Some(&manager.token),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["approved_by"], manager_employee.to_string());
}

#[tokio::test]
async fn test_approve_without_linked_employee_is_rejected() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            &format!("/api/absences/{}/approve", absence),
            Some(&admin.token),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().starts_with("approver_id"));
}

#[tokio::test]
async fn test_self_approval_is_rejected() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    let (status, _) = post(
        &app.router,
        &format!("/api/absences/{}/approve", absence),
        &admin.token,
        json!({ "approver_id": employee }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_employee_role_cannot_approve() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let worker = create_and_authenticate_user(&app.router, "worker", "employee").await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let approver = create_employee(&app.router, &admin.token, "EMP002").await;
    let absence = create_absence(&app.router, &worker.token, employee).await;

    let (status, _) = post(
        &app.router,
        &format!("/api/absences/{}/approve", absence),
        &worker.token,
        json!({ "approver_id": approver }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 取り消しは申請者側でも可能
    let (status, body) = post(
        &app.router,
        &format!("/api/absences/{}/cancel", absence),
        &worker.token,
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");
}

#[tokio::test]
async fn test_terminal_states_cannot_change() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let approver = create_employee(&app.router, &admin.token, "EMP002").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    let (status, body) = post(
        &app.router,
        &format!("/api/absences/{}/reject", absence),
        &admin.token,
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "rejected");

    let (status, _) = post(
        &app.router,
        &format!("/api/absences/{}/approve", absence),
        &admin.token,
        json!({ "approver_id": approver }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app.router,
        &format!("/api/absences/{}/cancel", absence),
        &admin.token,
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = put(
        &app.router,
        &format!("/api/absences/{}", absence),
        &admin.token,
        json!({ "reason": "changed my mind" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_pending_absence_checks_merged_dates() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    // 既存の開始日 2024-07-01 より前の終了日
    let (status, _) = put(
        &app.router,
        &format!("/api/absences/{}", absence),
        &admin.token,
        json!({ "end_date": "2024-06-30" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = put(
        &app.router,
        &format!("/api/absences/{}", absence),
        &admin.token,
        json!({ "end_date": "2024-07-05", "total_days": 5.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["end_date"], "2024-07-05");
    assert_eq!(body["data"]["total_days"], 5.0);
    assert_eq!(body["data"]["status"], "pending");
}

#[tokio::test]
async fn test_get_absence_requires_authentication() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    let (status, _) = get(&app.router, &format!("/api/absences/{}", absence), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = get(
        &app.router,
        &format!("/api/absences/{}", absence),
        Some(&admin.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], absence.to_string());
}

#[tokio::test]
async fn test_concurrent_approve_and_cancel_settle_once() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let approver = create_employee(&app.router, &admin.token, "EMP002").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;

    let approve_uri = format!("/api/absences/{}/approve", absence);
    let cancel_uri = format!("/api/absences/{}/cancel", absence);
    let ((approve_status, _), (cancel_status, _)) = tokio::join!(
        post(
            &app.router,
            &approve_uri,
            &admin.token,
            json!({ "approver_id": approver }),
        ),
        post(&app.router, &cancel_uri, &admin.token, json!({})),
    );

    let succeeded = [approve_status, cancel_status]
        .iter()
        .filter(|status| **status == StatusCode::OK)
        .count();
    assert_eq!(succeeded, 1);
    assert!(
        approve_status == StatusCode::BAD_REQUEST || cancel_status == StatusCode::BAD_REQUEST
    );

    let (_, body) = get(
        &app.router,
        &format!("/api/absences/{}", absence),
        Some(&admin.token),
    )
    .await;
    let expected = if approve_status == StatusCode::OK {
        "approved"
    } else {
        "cancelled"
    };
    assert_eq!(body["data"]["status"], expected);
}

#[tokio::test]
async fn test_transition_from_pending_writes_only_once() {
    let app = setup_app().await;
    let admin = create_admin(&app.router).await;
    let employee = create_employee(&app.router, &admin.token, "EMP001").await;
    let approver = create_employee(&app.router, &admin.token, "EMP002").await;
    let absence = create_absence(&app.router, &admin.token, employee).await;
    let repo = AbsenceRepository::new(app.db.connection.clone());

    let first = repo
        .transition_from_pending(absence, AbsenceStatus::Rejected, None)
        .await
        .unwrap();
    let second = repo
        .transition_from_pending(absence, AbsenceStatus::Approved, Some(approver))
        .await
        .unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 0);

    let stored = repo.find_by_id(absence).await.unwrap().unwrap();
    assert_eq!(stored.status, AbsenceStatus::Rejected);
    assert_eq!(stored.approved_by, None);
    assert_eq!(stored.approved_at, None);

    // 直接書き換えられた後の承認要求は 400
    let (status, body) = post(
        &app.router,
        &format!("/api/absences/{}/approve", absence),
        &admin.token,
        json!({ "approver_id": approver }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_type"], "validation_error");
}
