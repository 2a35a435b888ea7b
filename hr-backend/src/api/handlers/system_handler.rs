// src/api/handlers/system_handler.rs
use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

const SERVICE_NAME: &str = "HR Dashboard API";

pub async fn root_handler() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        message: SERVICE_NAME,
        version: "1.0.0",
    })
}

pub async fn health_check_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

pub fn system_router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check_handler))
}
