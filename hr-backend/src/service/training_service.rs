// src/service/training_service.rs
use crate::api::dto::training_dto::{
    CreateTrainingRecordRequest, TrainingRecordResponse, UpdateTrainingRecordRequest,
};
use crate::domain::training_model::{self, ActiveModel as TrainingActiveModel};
use crate::domain::training_status::TrainingStatus;
use crate::domain::user_model::UserClaims;
use crate::error::AppResult;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::training_repository::TrainingRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use crate::utils::permission::{AccessPolicy, Action, Resource};
use crate::utils::validation::common::ensure_date_order;
use chrono::{NaiveDate, Utc};
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

const COMPLETE_PROGRESS: f64 = 100.0;

pub struct TrainingService {
    repo: Arc<TrainingRepository>,
    employee_repo: Arc<EmployeeRepository>,
}

impl TrainingService {
    pub fn new(repo: Arc<TrainingRepository>, employee_repo: Arc<EmployeeRepository>) -> Self {
        Self {
            repo,
            employee_repo,
        }
    }

    pub async fn create_record(
        &self,
        actor: &UserClaims,
        payload: CreateTrainingRecordRequest,
    ) -> AppResult<TrainingRecordResponse> {
        AccessPolicy::ensure(actor, Resource::Training, Action::Create)?;
        if let (Some(start), Some(end)) = (payload.start_date, payload.end_date) {
            ensure_date_order(start, end, "start_date", "end_date")?;
        }

        if !self.employee_repo.exists(payload.employee_id).await? {
            return Err(validation_error(
                "employee_id",
                &format!("Employee {} does not exist", payload.employee_id),
            ));
        }

        let record = self
            .repo
            .create(TrainingActiveModel {
                employee_id: Set(payload.employee_id),
                title: Set(payload.title),
                description: Set(payload.description),
                training_type: Set(payload.training_type),
                provider: Set(payload.provider),
                start_date: Set(payload.start_date),
                end_date: Set(payload.end_date),
                due_date: Set(payload.due_date),
                completion_date: Set(None),
                score: Set(payload.score),
                certificate_number: Set(payload.certificate_number),
                expiry_date: Set(payload.expiry_date),
                cost: Set(payload.cost),
                duration_hours: Set(payload.duration_hours),
                notes: Set(payload.notes),
                ..Default::default()
            })
            .await?;

        info!(
            training_id = %record.id,
            employee_id = %record.employee_id,
            "Training record created"
        );
        Ok(TrainingRecordResponse::from_model(record, today()))
    }

    pub async fn get_record(&self, id: Uuid) -> AppResult<TrainingRecordResponse> {
        Ok(TrainingRecordResponse::from_model(self.find(id).await?, today()))
    }

    pub async fn list_records(
        &self,
        employee_id: Option<Uuid>,
    ) -> AppResult<Vec<TrainingRecordResponse>> {
        let today = today();
        let records = self.repo.find_all(employee_id).await?;
        Ok(records
            .into_iter()
            .map(|record| TrainingRecordResponse::from_model(record, today))
            .collect())
    }

    /// 研修記録の更新
    ///
    /// ステータス遷移は更新後の期日で判定した実効ステータスを起点に検証する。
    /// 完了にすると進捗 100% と完了日（未指定なら当日）が設定される。
    pub async fn update_record(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateTrainingRecordRequest,
    ) -> AppResult<TrainingRecordResponse> {
        AccessPolicy::ensure(actor, Resource::Training, Action::Update)?;

        let record = self.find(id).await?;
        let today = today();

        let start_date = payload.start_date.or(record.start_date);
        let end_date = payload.end_date.or(record.end_date);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            ensure_date_order(start, end, "start_date", "end_date")?;
        }

        let due_date = payload.due_date.or(record.due_date);
        let expiry_date = payload.expiry_date.or(record.expiry_date);
        let current = record.status.effective(due_date, expiry_date, today);

        // 完了・期限切れの記録は進捗と完了日を固定する
        let progress_change =
            payload.progress_percentage.is_some() || payload.completion_date.is_some();
        if current.is_terminal() && progress_change {
            return Err(validation_error(
                "progress_percentage",
                &format!("Cannot change progress of a {} training record", current),
            ));
        }

        let mut active: TrainingActiveModel = record.into();

        if let Some(progress) = payload.progress_percentage {
            active.progress_percentage = Set(progress);
        }
        if let Some(completion_date) = payload.completion_date {
            active.completion_date = Set(Some(completion_date));
        }

        if let Some(next) = payload.status.filter(|next| *next != current) {
            if !current.can_transition_to(next) {
                return Err(validation_error(
                    "status",
                    &format!("Cannot change training from {} to {}", current, next),
                ));
            }
            active.status = Set(next);
            if next == TrainingStatus::Completed {
                active.progress_percentage = Set(COMPLETE_PROGRESS);
                active.completion_date = Set(Some(payload.completion_date.unwrap_or(today)));
            }
        }

        if let Some(title) = payload.title {
            active.title = Set(title);
        }
        if let Some(description) = payload.description {
            active.description = Set(Some(description));
        }
        if let Some(training_type) = payload.training_type {
            active.training_type = Set(training_type);
        }
        if let Some(provider) = payload.provider {
            active.provider = Set(Some(provider));
        }
        active.start_date = Set(start_date);
        active.end_date = Set(end_date);
        active.due_date = Set(due_date);
        active.expiry_date = Set(expiry_date);
        if let Some(score) = payload.score {
            active.score = Set(Some(score));
        }
        if let Some(certificate_number) = payload.certificate_number {
            active.certificate_number = Set(Some(certificate_number));
        }
        if let Some(cost) = payload.cost {
            active.cost = Set(Some(cost));
        }
        if let Some(duration_hours) = payload.duration_hours {
            active.duration_hours = Set(Some(duration_hours));
        }
        if let Some(notes) = payload.notes {
            active.notes = Set(Some(notes));
        }

        let updated = self.repo.update(active).await?;
        info!(
            training_id = %updated.id,
            status = %updated.status,
            updated_by = %actor.user_id,
            "Training record updated"
        );
        Ok(TrainingRecordResponse::from_model(updated, today))
    }

    async fn find(&self, id: Uuid) -> AppResult<training_model::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Training record", id))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
