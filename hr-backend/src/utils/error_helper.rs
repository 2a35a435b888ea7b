// src/utils/error_helper.rs

//! エラー生成ヘルパー
//!
//! サービス層とハンドラー層で共通のログ付きエラー生成を提供します。

use crate::error::AppError;
use tracing::{error, warn};
use validator::ValidationErrors;

/// validatorのValidationErrorsをAppErrorに変換する
pub fn convert_validation_errors(validation_errors: ValidationErrors, context: &str) -> AppError {
    warn!(
        context = %context,
        error_count = validation_errors.field_errors().len(),
        "Validation failed"
    );

    let mut errors: Vec<String> = validation_errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |cow| cow.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();
    errors.sort();

    AppError::ValidationErrors(errors)
}

/// 単一フィールドのバリデーションエラー
pub fn validation_error(field: &str, message: &str) -> AppError {
    AppError::ValidationError(format!("{}: {}", field, message))
}

/// 内部サーバーエラーをログ付きで生成
pub fn internal_server_error<E: std::fmt::Display>(
    error: E,
    context: &str,
    user_message: &str,
) -> AppError {
    error!(
        error = %error,
        context = %context,
        "Internal server error occurred"
    );
    AppError::InternalServerError(user_message.to_string())
}

/// 禁止エラーをログ付きで生成
pub fn forbidden_error(message: &str, context: &str, user_id: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        user_id = %user_id,
        "Forbidden access attempt"
    );
    AppError::Forbidden(message.to_string())
}

/// リソース未発見エラー
pub fn not_found_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", resource, id))
}

/// 競合エラーをログ付きで生成
pub fn conflict_error(message: &str, context: &str) -> AppError {
    warn!(
        context = %context,
        message = %message,
        "Resource conflict occurred"
    );
    AppError::Conflict(message.to_string())
}
