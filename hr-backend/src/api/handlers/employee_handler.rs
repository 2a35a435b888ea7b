// src/api/handlers/employee_handler.rs
use crate::api::dto::employee_dto::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::api::dto::MessageResponse;
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedUuid};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::{ApiResponse, SkipLimitQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

pub async fn create_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    let employee = app_state
        .employee_service
        .create_employee(&user.claims, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(employee))))
}

/// skip / limit によるページング一覧
pub async fn list_employees_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<SkipLimitQuery>,
) -> AppResult<impl IntoResponse> {
    let employees = app_state.employee_service.list_employees(query).await?;
    Ok(ApiResponse::success(employees))
}

pub async fn get_employee_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let employee = app_state.employee_service.get_employee(id).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn update_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    let employee = app_state
        .employee_service
        .update_employee(&user.claims, id, payload)
        .await?;
    Ok(ApiResponse::success(employee))
}

pub async fn delete_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    app_state
        .employee_service
        .delete_employee(&user.claims, id)
        .await?;
    Ok(ApiResponse::success(MessageResponse::new(
        "Employee deleted successfully",
    )))
}

pub async fn list_by_department_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedUuid(department_id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let employees = app_state
        .employee_service
        .list_by_department(department_id)
        .await?;
    Ok(ApiResponse::success(employees))
}

pub fn employee_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route(
            "/employees/department/{id}",
            get(list_by_department_handler),
        )
        .with_state(app_state)
}
