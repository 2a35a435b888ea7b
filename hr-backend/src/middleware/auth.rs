// src/middleware/auth.rs

use crate::config::AppConfig;
use crate::domain::user_model::UserClaims;
use crate::error::AppError;
use crate::utils::jwt::{JwtError, JwtManager};
use axum::http::{header, request::Parts, HeaderMap, HeaderValue, Method};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::warn;

/// 認証済みユーザー（Bearer トークンから復元）
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: UserClaims,
}

impl AuthenticatedUser {
    pub fn user_id(&self) -> uuid::Uuid {
        self.claims.user_id
    }
}

/// JWT マネージャーを提供するトレイト
pub trait HasJwtManager {
    fn jwt_manager(&self) -> &Arc<JwtManager>;
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: HasJwtManager + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        let claims = state.jwt_manager().verify_access_token(token).map_err(|e| {
            warn!(error = %e, path = %parts.uri.path(), "Access token rejected");
            match e {
                JwtError::TokenExpired => AppError::Unauthorized("Token has expired".to_string()),
                _ => AppError::Unauthorized("Invalid access token".to_string()),
            }
        })?;

        if !claims.user.is_active {
            return Err(AppError::Unauthorized("Account is inactive".to_string()));
        }

        Ok(Self {
            claims: claims.user,
        })
    }
}

/// Authorization ヘッダーからトークンを取り出す
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// CORS 設定（許可オリジンは設定値から）
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
