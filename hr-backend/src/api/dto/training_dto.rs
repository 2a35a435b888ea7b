// src/api/dto/training_dto.rs
use crate::domain::training_model;
use crate::domain::training_status::{TrainingStatus, TrainingType};
use crate::utils::validation::common::{record, required};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateTrainingRecordRequest {
    pub employee_id: Uuid,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = record::TITLE_MAX_LENGTH,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    pub description: Option<String>,
    pub training_type: TrainingType,

    #[validate(length(max = record::SHORT_TEXT_MAX_LENGTH))]
    pub provider: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub score: Option<f64>,

    #[validate(length(max = record::SHORT_TEXT_MAX_LENGTH))]
    pub certificate_number: Option<String>,

    pub expiry_date: Option<NaiveDate>,

    #[validate(range(min = 0.0, message = "Cost must not be negative"))]
    pub cost: Option<f64>,

    #[validate(range(min = 0.0, message = "Duration must not be negative"))]
    pub duration_hours: Option<f64>,

    pub notes: Option<String>,
}

/// 研修記録の更新。`status` を指定した場合は遷移ルールを検証する
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateTrainingRecordRequest {
    #[validate(length(min = required::MIN_LENGTH, max = record::TITLE_MAX_LENGTH))]
    pub title: Option<String>,

    pub description: Option<String>,
    pub training_type: Option<TrainingType>,

    #[validate(length(max = record::SHORT_TEXT_MAX_LENGTH))]
    pub provider: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub status: Option<TrainingStatus>,

    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "Progress must be between 0 and 100"
    ))]
    pub progress_percentage: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub score: Option<f64>,

    #[validate(length(max = record::SHORT_TEXT_MAX_LENGTH))]
    pub certificate_number: Option<String>,

    pub expiry_date: Option<NaiveDate>,

    #[validate(range(min = 0.0, message = "Cost must not be negative"))]
    pub cost: Option<f64>,

    #[validate(range(min = 0.0, message = "Duration must not be negative"))]
    pub duration_hours: Option<f64>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingRecordResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub training_type: TrainingType,
    pub provider: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    /// 基準日時点の実効ステータス
    pub status: TrainingStatus,
    pub progress_percentage: f64,
    pub score: Option<f64>,
    pub certificate_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub cost: Option<f64>,
    pub duration_hours: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainingRecordResponse {
    pub fn from_model(model: training_model::Model, today: NaiveDate) -> Self {
        let status = model.effective_status(today);
        Self {
            id: model.id,
            employee_id: model.employee_id,
            title: model.title,
            description: model.description,
            training_type: model.training_type,
            provider: model.provider,
            start_date: model.start_date,
            end_date: model.end_date,
            due_date: model.due_date,
            completion_date: model.completion_date,
            status,
            progress_percentage: model.progress_percentage,
            score: model.score,
            certificate_number: model.certificate_number,
            expiry_date: model.expiry_date,
            cost: model.cost,
            duration_hours: model.duration_hours,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
