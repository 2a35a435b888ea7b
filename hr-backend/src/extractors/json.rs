// src/extractors/json.rs
use crate::error::AppError;
use crate::utils::error_helper::convert_validation_errors;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSONボディをデシリアライズし、validator で検証する
///
/// 不正なJSONや列挙値の誤りは 422 ではなく 400 の ValidationError として返す。
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::ValidationError(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| convert_validation_errors(e, "request_body"))?;

        Ok(ValidatedJson(value))
    }
}
