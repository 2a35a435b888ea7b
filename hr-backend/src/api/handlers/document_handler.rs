// src/api/handlers/document_handler.rs
use crate::api::dto::document_dto::{CreateDocumentRequest, UpdateDocumentRequest};
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

pub async fn list_documents_handler(
    State(app_state): State<AppState>,
    Query(filter): Query<RecordFilterQuery>,
) -> AppResult<impl IntoResponse> {
    let documents = app_state
        .document_service
        .list_documents(filter.employee_id)
        .await?;
    Ok(ApiResponse::success(documents))
}

pub async fn create_document_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateDocumentRequest>,
) -> AppResult<impl IntoResponse> {
    let document = app_state
        .document_service
        .create_document(&user.claims, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(document))))
}

pub async fn get_document_handler(
    State(app_state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let document = app_state.document_service.get_document(id).await?;
    Ok(ApiResponse::success(document))
}

pub async fn update_document_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
    ValidatedJson(payload): ValidatedJson<UpdateDocumentRequest>,
) -> AppResult<impl IntoResponse> {
    let document = app_state
        .document_service
        .update_document(&user.claims, id, payload)
        .await?;
    Ok(ApiResponse::success(document))
}

pub async fn archive_document_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedUuid(id): ValidatedUuid,
) -> AppResult<impl IntoResponse> {
    let document = app_state
        .document_service
        .archive_document(&user.claims, id)
        .await?;
    Ok(ApiResponse::success_with_message(document, "Document archived"))
}

pub fn document_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/documents",
            get(list_documents_handler).post(create_document_handler),
        )
        .route(
            "/documents/{id}",
            get(get_document_handler).put(update_document_handler),
        )
        .route("/documents/{id}/archive", post(archive_document_handler))
        .with_state(app_state)
}
