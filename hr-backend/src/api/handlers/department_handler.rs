// src/api/handlers/department_handler.rs
use crate::api::dto::department_dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedUuid};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::ApiResponse;
use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};

/// 有効な部署一覧（認証不要）
pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let departments = app_state.department_service.list_departments().await?;
    Ok(ApiResponse::success(departments))
}

pub async fn create_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    let department = app_state
        .department_service
        .create_department(&user.claims, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(department))))
}

pub async fn get_department_handler(
    State(app_state): State<AppState>,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let department = app_state.department_service.get_department(id).await?;
    Ok(ApiResponse::success(department))
}

pub async fn update_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateDepartmentRequest>,
) -> AppResult<impl IntoResponse> {
    let department = app_state
        .department_service
        .update_department(&user.claims, id, payload)
        .await?;
    Ok(ApiResponse::success(department))
}

pub fn department_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/departments",
            get(list_departments_handler).post(create_department_handler),
        )
        .route(
            "/departments/{id}",
            get(get_department_handler).put(update_department_handler),
        )
        .with_state(app_state)
}
