// tests/integration/system.rs

use axum::http::StatusCode;

use crate::common::{app_helper::setup_app, request::get};

#[tokio::test]
async fn test_root_reports_service_and_version() {
    let app = setup_app().await;

    let (status, body) = get(&app.router, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "HR Dashboard API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app().await;

    let (status, body) = get(&app.router, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "HR Dashboard API");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_app().await;

    let (status, _) = get(&app.router, "/api/unknown", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
