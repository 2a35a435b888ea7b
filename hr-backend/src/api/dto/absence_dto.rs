// src/api/dto/absence_dto.rs
use crate::domain::absence_model;
use crate::domain::absence_status::{AbsenceStatus, AbsenceType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 休暇申請の作成リクエスト
///
/// ステータスや承認者はリクエストに含まれていても無視され、常に pending で作成される。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateAbsenceRequest {
    pub employee_id: Uuid,
    pub absence_type: AbsenceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(exclusive_min = 0.0, message = "Total days must be greater than 0"))]
    pub total_days: f64,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// 申請中の休暇の内容変更
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateAbsenceRequest {
    pub absence_type: Option<AbsenceType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(range(exclusive_min = 0.0, message = "Total days must be greater than 0"))]
    pub total_days: Option<f64>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}

/// 承認リクエスト。承認者省略時はログインユーザーに紐づく従業員
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ApproveAbsenceRequest {
    pub approver_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbsenceResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub absence_type: AbsenceType,
    pub status: AbsenceStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: f64,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<absence_model::Model> for AbsenceResponse {
    fn from(model: absence_model::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            absence_type: model.absence_type,
            status: model.status,
            start_date: model.start_date,
            end_date: model.end_date,
            total_days: model.total_days,
            reason: model.reason,
            notes: model.notes,
            approved_by: model.approved_by,
            approved_at: model.approved_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
