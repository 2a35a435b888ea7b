// src/api/handlers/absence_handler.rs
use crate::api::dto::absence_dto::{
    ApproveAbsenceRequest, CreateAbsenceRequest, UpdateAbsenceRequest,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedUuid};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::{ApiResponse, RecordFilterQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

pub async fn list_absences_handler(
    State(app_state): State<AppState>,
    Query(filter): Query<RecordFilterQuery>,
) -> AppResult<impl IntoResponse> {
    let absences = app_state
        .absence_service
        .list_absences(filter.employee_id)
        .await?;
    Ok(ApiResponse::success(absences))
}

pub async fn create_absence_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateAbsenceRequest>,
) -> AppResult<impl IntoResponse> {
    let absence = app_state
        .absence_service
        .create_absence(&user.claims, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(absence))))
}

pub async fn get_absence_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let absence = app_state.absence_service.get_absence(id).await?;
    Ok(ApiResponse::success(absence))
}

pub async fn update_absence_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateAbsenceRequest>,
) -> AppResult<impl IntoResponse> {
    let absence = app_state
        .absence_service
        .update_absence(&user.claims, id, payload)
        .await?;
    Ok(ApiResponse::success(absence))
}

/// 承認（ボディは省略可）
pub async fn approve_absence_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    payload: Option<Json<ApproveAbsenceRequest>>,
) -> AppResult<impl IntoResponse> {
    let payload = payload.map(|Json(body)| body).unwrap_or_default();
    let absence = app_state
        .absence_service
        .approve_absence(&user.claims, id, payload)
        .await?;
    Ok(ApiResponse::success(absence))
}

pub async fn reject_absence_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let absence = app_state
        .absence_service
        .reject_absence(&user.claims, id)
        .await?;
    Ok(ApiResponse::success(absence))
}

pub async fn cancel_absence_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let absence = app_state
        .absence_service
        .cancel_absence(&user.claims, id)
        .await?;
    Ok(ApiResponse::success(absence))
}

pub fn absence_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/absences",
            get(list_absences_handler).post(create_absence_handler),
        )
        .route(
            "/absences/{id}",
            get(get_absence_handler).put(update_absence_handler),
        )
        .route("/absences/{id}/approve", post(approve_absence_handler))
        .route("/absences/{id}/reject", post(reject_absence_handler))
        .route("/absences/{id}/cancel", post(cancel_absence_handler))
        .with_state(app_state)
}
