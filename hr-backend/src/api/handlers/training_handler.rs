// src/api/handlers/training_handler.rs
use crate::api::dto::training_dto::{CreateTrainingRecordRequest, UpdateTrainingRecordRequest};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedUuid};
use crate::middleware::auth::AuthenticatedUser;
use crate::types::{ApiResponse, RecordFilterQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

/// 研修記録一覧。期限切れは読み取り時に判定される
pub async fn list_training_handler(
    State(app_state): State<AppState>,
    Query(filter): Query<RecordFilterQuery>,
) -> AppResult<impl IntoResponse> {
    let records = app_state
        .training_service
        .list_records(filter.employee_id)
        .await?;
    Ok(ApiResponse::success(records))
}

pub async fn create_training_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateTrainingRecordRequest>,
) -> AppResult<impl IntoResponse> {
    let record = app_state
        .training_service
        .create_record(&user.claims, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(record))))
}

pub async fn get_training_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let record = app_state.training_service.get_record(id).await?;
    Ok(ApiResponse::success(record))
}

pub async fn update_training_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateTrainingRecordRequest>,
) -> AppResult<impl IntoResponse> {
    let record = app_state
        .training_service
        .update_record(&user.claims, id, payload)
        .await?;
    Ok(ApiResponse::success(record))
}

pub fn training_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/training",
            get(list_training_handler).post(create_training_handler),
        )
        .route(
            "/training/{id}",
            get(get_training_handler).put(update_training_handler),
        )
        .with_state(app_state)
}
