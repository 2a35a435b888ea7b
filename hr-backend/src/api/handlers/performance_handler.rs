// src/api/handlers/performance_handler.rs
use crate::api::dto::performance_dto::{
    CreatePerformanceReviewRequest, UpdatePerformanceReviewRequest,
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

pub async fn list_reviews_handler(
    State(app_state): State<AppState>,
    Query(filter): Query<RecordFilterQuery>,
) -> AppResult<impl IntoResponse> {
    let reviews = app_state
        .performance_service
        .list_reviews(filter.employee_id)
        .await?;
    Ok(ApiResponse::success(reviews))
}

pub async fn create_review_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreatePerformanceReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let review = app_state
        .performance_service
        .create_review(&user.claims, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(review))))
}

pub async fn get_review_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let review = app_state.performance_service.get_review(id).await?;
    Ok(ApiResponse::success(review))
}

pub async fn update_review_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdatePerformanceReviewRequest>,
) -> AppResult<impl IntoResponse> {
    let review = app_state
        .performance_service
        .update_review(&user.claims, id, payload)
        .await?;
    Ok(ApiResponse::success(review))
}

pub async fn acknowledge_review_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let review = app_state
        .performance_service
        .acknowledge_review(&user.claims, id)
        .await?;
    Ok(ApiResponse::success_with_message(
        review,
        "Performance review acknowledged",
    ))
}

pub fn performance_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/performance",
            get(list_reviews_handler).post(create_review_handler),
        )
        .route(
            "/performance/{id}",
            get(get_review_handler).put(update_review_handler),
        )
        .route(
            "/performance/{id}/acknowledge",
            post(acknowledge_review_handler),
        )
        .with_state(app_state)
}
