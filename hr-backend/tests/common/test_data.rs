// tests/common/test_data.rs

use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::request::post;

pub fn employee_payload(code: &str) -> Value {
    json!({
        "employee_id": code,
        "first_name": "Test",
        "last_name": code,
        "hire_date": "2024-01-15",
        "position": "Engineer",
        "employment_type": "full_time",
        "salary": 50000.0
    })
}

fn id_of(body: &Value) -> Uuid {
    Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap()
}

pub async fn create_employee(app: &Router, token: &str, code: &str) -> Uuid {
    create_employee_with(app, token, employee_payload(code)).await
}

pub async fn create_employee_with(app: &Router, token: &str, payload: Value) -> Uuid {
    let (status, body) = post(app, "/api/employees", token, payload).await;
    assert_eq!(status, StatusCode::CREATED, "create employee failed: {}", body);
    id_of(&body)
}

pub async fn create_department(app: &Router, token: &str, name: &str) -> Uuid {
    let (status, body) = post(
        app,
        "/api/departments",
        token,
        json!({ "name": name, "description": format!("{} department", name) }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create department failed: {}", body);
    id_of(&body)
}

pub fn absence_payload(employee_id: Uuid) -> Value {
    json!({
        "employee_id": employee_id,
        "absence_type": "annual_leave",
        "start_date": "2024-07-01",
        "end_date": "2024-07-03",
        "total_days": 3.0,
        "reason": "Summer holiday"
    })
}

pub async fn create_absence(app: &Router, token: &str, employee_id: Uuid) -> Uuid {
    let (status, body) = post(app, "/api/absences", token, absence_payload(employee_id)).await;
    assert_eq!(status, StatusCode::CREATED, "create absence failed: {}", body);
    id_of(&body)
}

pub fn review_payload(employee_id: Uuid, reviewer_id: Uuid) -> Value {
    json!({
        "employee_id": employee_id,
        "reviewer_id": reviewer_id,
        "review_date": "2024-07-01",
        "review_period_start": "2024-01-01",
        "review_period_end": "2024-06-30",
        "overall_rating": 4,
        "communication": 5,
        "strengths": "Clear communicator"
    })
}

pub async fn create_review(
    app: &Router,
    token: &str,
    employee_id: Uuid,
    reviewer_id: Uuid,
) -> Uuid {
    let (status, body) = post(
        app,
        "/api/performance",
        token,
        review_payload(employee_id, reviewer_id),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create review failed: {}", body);
    id_of(&body)
}

pub async fn create_training(app: &Router, token: &str, payload: Value) -> Uuid {
    let (status, body) = post(app, "/api/training", token, payload).await;
    assert_eq!(status, StatusCode::CREATED, "create training failed: {}", body);
    id_of(&body)
}

pub fn document_payload(employee_id: Uuid) -> Value {
    json!({
        "employee_id": employee_id,
        "title": "Employment contract",
        "document_type": "contract",
        "file_path": "s3://hr-docs/contracts/contract.pdf",
        "file_name": "contract.pdf",
        "file_size": 20480,
        "mime_type": "application/pdf"
    })
}

pub async fn create_document(app: &Router, token: &str, payload: Value) -> Uuid {
    let (status, body) = post(app, "/api/documents", token, payload).await;
    assert_eq!(status, StatusCode::CREATED, "create document failed: {}", body);
    id_of(&body)
}
