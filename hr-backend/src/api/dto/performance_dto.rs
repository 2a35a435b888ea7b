// src/api/dto/performance_dto.rs
use crate::domain::performance_model;
use crate::domain::performance_rating::PerformanceRating;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 評価作成リクエスト
///
/// 評価値は 1..=5 の整数。範囲外はデシリアライズ時点で拒否される。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreatePerformanceReviewRequest {
    pub employee_id: Uuid,
    pub reviewer_id: Uuid,
    pub review_date: NaiveDate,
    pub review_period_start: NaiveDate,
    pub review_period_end: NaiveDate,
    pub overall_rating: PerformanceRating,
    pub technical_skills: Option<PerformanceRating>,
    pub communication: Option<PerformanceRating>,
    pub teamwork: Option<PerformanceRating>,
    pub leadership: Option<PerformanceRating>,
    pub initiative: Option<PerformanceRating>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub goals: Option<String>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdatePerformanceReviewRequest {
    pub review_date: Option<NaiveDate>,
    pub review_period_start: Option<NaiveDate>,
    pub review_period_end: Option<NaiveDate>,
    pub overall_rating: Option<PerformanceRating>,
    pub technical_skills: Option<PerformanceRating>,
    pub communication: Option<PerformanceRating>,
    pub teamwork: Option<PerformanceRating>,
    pub leadership: Option<PerformanceRating>,
    pub initiative: Option<PerformanceRating>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub goals: Option<String>,
    pub comments: Option<String>,
    pub is_completed: Option<bool>,
    pub employee_acknowledged: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerformanceReviewResponse {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub reviewer_id: Uuid,
    pub review_date: NaiveDate,
    pub review_period_start: NaiveDate,
    pub review_period_end: NaiveDate,
    pub overall_rating: PerformanceRating,
    pub overall_rating_label: String,
    pub technical_skills: Option<PerformanceRating>,
    pub communication: Option<PerformanceRating>,
    pub teamwork: Option<PerformanceRating>,
    pub leadership: Option<PerformanceRating>,
    pub initiative: Option<PerformanceRating>,
    pub strengths: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub goals: Option<String>,
    pub comments: Option<String>,
    pub is_completed: bool,
    pub employee_acknowledged: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<performance_model::Model> for PerformanceReviewResponse {
    fn from(model: performance_model::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            reviewer_id: model.reviewer_id,
            review_date: model.review_date,
            review_period_start: model.review_period_start,
            review_period_end: model.review_period_end,
            overall_rating_label: model.overall_rating.label().to_string(),
            overall_rating: model.overall_rating,
            technical_skills: model.technical_skills,
            communication: model.communication,
            teamwork: model.teamwork,
            leadership: model.leadership,
            initiative: model.initiative,
            strengths: model.strengths,
            areas_for_improvement: model.areas_for_improvement,
            goals: model.goals,
            comments: model.comments,
            is_completed: model.is_completed,
            employee_acknowledged: model.employee_acknowledged,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
