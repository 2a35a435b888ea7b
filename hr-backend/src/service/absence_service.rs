// src/service/absence_service.rs
use crate::api::dto::absence_dto::{
    AbsenceResponse, ApproveAbsenceRequest, CreateAbsenceRequest, UpdateAbsenceRequest,
};
use crate::domain::absence_model::{self, ActiveModel as AbsenceActiveModel};
use crate::domain::absence_status::AbsenceStatus;
use crate::domain::user_model::UserClaims;
use crate::error::AppResult;
use crate::repository::absence_repository::AbsenceRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use crate::utils::permission::{AccessPolicy, Action, Resource};
use crate::utils::validation::common::ensure_date_order;
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 休暇申請の承認フロー
pub struct AbsenceService {
    repo: Arc<AbsenceRepository>,
    employee_repo: Arc<EmployeeRepository>,
}

impl AbsenceService {
    pub fn new(repo: Arc<AbsenceRepository>, employee_repo: Arc<EmployeeRepository>) -> Self {
        Self {
            repo,
            employee_repo,
        }
    }

    /// 申請は常に pending で作成される
    pub async fn create_absence(
        &self,
        actor: &UserClaims,
        payload: CreateAbsenceRequest,
    ) -> AppResult<AbsenceResponse> {
        AccessPolicy::ensure(actor, Resource::Absence, Action::Create)?;
        ensure_date_order(payload.start_date, payload.end_date, "start_date", "end_date")?;

        if !self.employee_repo.exists(payload.employee_id).await? {
            return Err(validation_error(
                "employee_id",
                &format!("Employee {} does not exist", payload.employee_id),
            ));
        }

        let absence = self
            .repo
            .create(AbsenceActiveModel {
                employee_id: Set(payload.employee_id),
                absence_type: Set(payload.absence_type),
                start_date: Set(payload.start_date),
                end_date: Set(payload.end_date),
                total_days: Set(payload.total_days),
                reason: Set(payload.reason),
                notes: Set(payload.notes),
                ..Default::default()
            })
            .await?;

        info!(
            absence_id = %absence.id,
            employee_id = %absence.employee_id,
            absence_type = ?absence.absence_type,
            "Absence requested"
        );
        Ok(absence.into())
    }

    pub async fn get_absence(&self, id: Uuid) -> AppResult<AbsenceResponse> {
        Ok(self.find(id).await?.into())
    }

    pub async fn list_absences(
        &self,
        employee_id: Option<Uuid>,
    ) -> AppResult<Vec<AbsenceResponse>> {
        let absences = self.repo.find_all(employee_id).await?;
        Ok(absences.into_iter().map(Into::into).collect())
    }

    /// 申請中の間のみ内容を変更できる
    pub async fn update_absence(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateAbsenceRequest,
    ) -> AppResult<AbsenceResponse> {
        AccessPolicy::ensure(actor, Resource::Absence, Action::Update)?;

        let absence = self.find(id).await?;
        if absence.status != AbsenceStatus::Pending {
            return Err(validation_error(
                "status",
                &format!("Cannot modify an absence that is {}", absence.status),
            ));
        }

        let start_date = payload.start_date.unwrap_or(absence.start_date);
        let end_date = payload.end_date.unwrap_or(absence.end_date);
        ensure_date_order(start_date, end_date, "start_date", "end_date")?;

        let mut active: AbsenceActiveModel = absence.into();
        if let Some(absence_type) = payload.absence_type {
            active.absence_type = Set(absence_type);
        }
        active.start_date = Set(start_date);
        active.end_date = Set(end_date);
        if let Some(total_days) = payload.total_days {
            active.total_days = Set(total_days);
        }
        if let Some(reason) = payload.reason {
            active.reason = Set(Some(reason));
        }
        if let Some(notes) = payload.notes {
            active.notes = Set(Some(notes));
        }

        let updated = self.repo.update(active).await?;
        info!(absence_id = %updated.id, updated_by = %actor.user_id, "Absence updated");
        Ok(updated.into())
    }

    /// 承認。承認者は指定がなければログインユーザーに紐づく従業員
    pub async fn approve_absence(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: ApproveAbsenceRequest,
    ) -> AppResult<AbsenceResponse> {
        AccessPolicy::ensure(actor, Resource::Absence, Action::Approve)?;

        let absence = self.find(id).await?;
        ensure_transition(&absence, AbsenceStatus::Approved)?;

        let approver_id = match payload.approver_id {
            Some(approver_id) => {
                if !self.employee_repo.exists(approver_id).await? {
                    return Err(validation_error(
                        "approver_id",
                        &format!("Employee {} does not exist", approver_id),
                    ));
                }
                approver_id
            }
            None => self
                .employee_repo
                .find_by_user_id(actor.user_id)
                .await?
                .map(|employee| employee.id)
                .ok_or_else(|| {
                    validation_error(
                        "approver_id",
                        "No employee record is linked to the current user",
                    )
                })?,
        };

        if approver_id == absence.employee_id {
            return Err(validation_error(
                "approver_id",
                "An employee cannot approve their own absence",
            ));
        }

        let updated = self
            .apply_transition(&absence, AbsenceStatus::Approved, Some(approver_id))
            .await?;
        info!(
            absence_id = %updated.id,
            approver_id = %approver_id,
            approved_by_user = %actor.user_id,
            "Absence approved"
        );
        Ok(updated.into())
    }

    pub async fn reject_absence(
        &self,
        actor: &UserClaims,
        id: Uuid,
    ) -> AppResult<AbsenceResponse> {
        AccessPolicy::ensure(actor, Resource::Absence, Action::Approve)?;
        self.close(actor, id, AbsenceStatus::Rejected).await
    }

    pub async fn cancel_absence(
        &self,
        actor: &UserClaims,
        id: Uuid,
    ) -> AppResult<AbsenceResponse> {
        AccessPolicy::ensure(actor, Resource::Absence, Action::Update)?;
        self.close(actor, id, AbsenceStatus::Cancelled).await
    }

    /// 承認以外の終端状態への遷移
    async fn close(
        &self,
        actor: &UserClaims,
        id: Uuid,
        next: AbsenceStatus,
    ) -> AppResult<AbsenceResponse> {
        let absence = self.find(id).await?;
        ensure_transition(&absence, next)?;

        let updated = self.apply_transition(&absence, next, None).await?;
        info!(
            absence_id = %updated.id,
            status = %updated.status,
            user_id = %actor.user_id,
            "Absence closed"
        );
        Ok(updated.into())
    }

    /// pending を条件に書き込む。先に別の遷移が確定していれば検証エラー
    async fn apply_transition(
        &self,
        absence: &absence_model::Model,
        next: AbsenceStatus,
        approved_by: Option<Uuid>,
    ) -> AppResult<absence_model::Model> {
        let rows = self
            .repo
            .transition_from_pending(absence.id, next, approved_by)
            .await?;
        let current = self.find(absence.id).await?;
        if rows == 0 {
            return Err(validation_error(
                "status",
                &format!("Cannot change absence from {} to {}", current.status, next),
            ));
        }
        Ok(current)
    }

    async fn find(&self, id: Uuid) -> AppResult<absence_model::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Absence", id))
    }
}

fn ensure_transition(absence: &absence_model::Model, next: AbsenceStatus) -> AppResult<()> {
    if !absence.status.can_transition_to(next) {
        return Err(validation_error(
            "status",
            &format!("Cannot change absence from {} to {}", absence.status, next),
        ));
    }
    Ok(())
}
