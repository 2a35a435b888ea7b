// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(DbErr),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Failed to parse UUID: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

// 制約違反はストレージ層で検出し、生のDBエラーではなく業務エラーとして返す
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                AppError::DuplicateKey(unique_violation_message(&detail))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::ValidationError(
                "Referenced record does not exist or is still in use".to_string(),
            ),
            _ => match err {
                DbErr::RecordNotFound(entity) => AppError::NotFound(entity),
                other => AppError::DbErr(other),
            },
        }
    }
}

/// 一意制約違反の詳細からクライアント向けメッセージを組み立てる
fn unique_violation_message(detail: &str) -> String {
    const KNOWN: [(&str, &str); 5] = [
        ("employee_id", "Employee ID already exists"),
        ("users_email", "Email already registered"),
        ("users_username", "Username already taken"),
        ("departments_name", "Department name already exists"),
        ("employees_user_id", "User is already linked to another employee"),
    ];

    // Postgres はインデックス名、SQLite は "table.column" を返す
    let normalized = detail.replace('.', "_");
    KNOWN
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map_or_else(
            || "Record violates a unique constraint".to_string(),
            |(_, message)| message.to_string(),
        )
}

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                tracing::error!(error = ?db_err, "Database error");
                let details = match &db_err {
                    DbErr::Exec(_) => Some(json!({ "operation": "exec" })),
                    DbErr::Query(_) => Some(json!({ "operation": "query" })),
                    DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                        Some(json!({ "operation": "connection" }))
                    }
                    _ => None,
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        details,
                        ..ErrorResponse::new("A database error occurred", "database_error")
                    },
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(message, "not_found"),
            ),
            AppError::DuplicateKey(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "duplicate_key"),
            ),
            AppError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "validation_error"),
            ),
            AppError::ValidationErrors(errors) => {
                let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
                for error in &errors {
                    if let Some((field, message)) = error.split_once(": ") {
                        field_errors
                            .entry(field.to_string())
                            .or_default()
                            .push(message.to_string());
                    }
                }
                let errors_array = errors.iter().map(|e| json!({ "message": e })).collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        validation_errors: Some(field_errors),
                        errors: Some(errors_array),
                        ..ErrorResponse::new("Validation failed", "validation_errors")
                    },
                )
            }
            AppError::UuidError(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(format!("Invalid UUID: {}", err), "invalid_uuid"),
            ),
            AppError::ValidationFailure(errors) => {
                let field_errors: HashMap<String, Vec<String>> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let messages = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map_or_else(|| "Invalid value".to_string(), |m| m.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect();
                let errors_array = field_errors
                    .iter()
                    .flat_map(|(field, messages)| {
                        messages
                            .iter()
                            .map(move |msg| json!({ "message": format!("{}: {}", field, msg) }))
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        validation_errors: Some(field_errors),
                        errors: Some(errors_array),
                        ..ErrorResponse::new("Validation failed", "validation_errors")
                    },
                )
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "bad_request"),
            ),
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(message, "unauthorized"),
            ),
            AppError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(message, "forbidden"),
            ),
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(message, "conflict"),
            ),
            AppError::InternalServerError(message) => {
                tracing::error!(error = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "An internal server error occurred",
                        "internal_server_error",
                    ),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<serde_json::Value>>,
    pub error_type: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error_type: &str) -> Self {
        let message = message.into();
        Self {
            success: false,
            error: message.clone(),
            message,
            details: None,
            validation_errors: None,
            errors: None,
            error_type: error_type.to_string(),
        }
    }
}
