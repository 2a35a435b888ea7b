// src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::{LoginRequest, RegisterRequest};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::middleware::auth::AuthenticatedUser;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

/// ログイン。トークンとユーザー情報をそのまま返す
pub async fn login_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let response = app_state.auth_service.login(payload).await?;
    Ok(Json(response))
}

pub async fn register_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let user = app_state.auth_service.register(payload).await?;
    info!(user_id = %user.id, "Registration completed");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn me_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<impl IntoResponse> {
    let current = app_state.auth_service.me(user.user_id()).await?;
    Ok(Json(current))
}

pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/me", get(me_handler))
        .with_state(app_state)
}
