// src/api/dto/document_dto.rs
use crate::domain::document_model;
use crate::domain::document_status::{DocumentStatus, DocumentType};
use crate::utils::validation::common::{record, required};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 書類メタデータの登録リクエスト（ファイル本体は外部ストレージ側）
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateDocumentRequest {
    pub employee_id: Uuid,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = record::TITLE_MAX_LENGTH,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    pub description: Option<String>,
    pub document_type: DocumentType,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = record::FILE_PATH_MAX_LENGTH,
        message = "File path must be between 1 and 500 characters"
    ))]
    pub file_path: String,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = record::FILE_NAME_MAX_LENGTH,
        message = "File name must be between 1 and 255 characters"
    ))]
    pub file_name: String,

    #[validate(range(min = 0, message = "File size must not be negative"))]
    pub file_size: Option<i64>,

    #[validate(length(max = record::SHORT_TEXT_MAX_LENGTH))]
    pub mime_type: Option<String>,

    pub expiry_date: Option<NaiveDate>,
    pub tags: Option<String>,

    #[validate(length(min = required::MIN_LENGTH, max = 20))]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateDocumentRequest {
    #[validate(length(min = required::MIN_LENGTH, max = record::TITLE_MAX_LENGTH))]
    pub title: Option<String>,

    pub description: Option<String>,
    pub document_type: Option<DocumentType>,

    #[validate(length(min = required::MIN_LENGTH, max = record::FILE_PATH_MAX_LENGTH))]
    pub file_path: Option<String>,

    #[validate(length(min = required::MIN_LENGTH, max = record::FILE_NAME_MAX_LENGTH))]
    pub file_name: Option<String>,

    #[validate(range(min = 0, message = "File size must not be negative"))]
    pub file_size: Option<i64>,

    #[validate(length(max = record::SHORT_TEXT_MAX_LENGTH))]
    pub mime_type: Option<String>,

    pub status: Option<DocumentStatus>,
    pub expiry_date: Option<NaiveDate>,
    pub tags: Option<String>,

    #[validate(length(min = required::MIN_LENGTH, max = 20))]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub document_type: DocumentType,
    pub file_path: String,
    pub file_name: String,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub status: DocumentStatus,
    pub upload_date: DateTime<Utc>,
    pub expiry_date: Option<NaiveDate>,
    pub archived_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentResponse {
    pub fn from_model(model: document_model::Model, today: NaiveDate) -> Self {
        let status = model.effective_status(today);
        Self {
            id: model.id,
            employee_id: model.employee_id,
            title: model.title,
            description: model.description,
            document_type: model.document_type,
            file_path: model.file_path,
            file_name: model.file_name,
            file_size: model.file_size,
            mime_type: model.mime_type,
            status,
            upload_date: model.upload_date,
            expiry_date: model.expiry_date,
            archived_date: model.archived_date,
            tags: model.tags,
            version: model.version,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
