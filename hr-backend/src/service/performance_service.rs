// src/service/performance_service.rs
use crate::api::dto::performance_dto::{
    CreatePerformanceReviewRequest, PerformanceReviewResponse, UpdatePerformanceReviewRequest,
};
use crate::domain::performance_model::{self, ActiveModel as PerformanceActiveModel};
use crate::domain::user_model::UserClaims;
use crate::domain::user_role::UserRole;
use crate::error::AppResult;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::performance_repository::PerformanceRepository;
use crate::utils::error_helper::{forbidden_error, not_found_error, validation_error};
use crate::utils::permission::{AccessPolicy, Action, Resource};
use crate::utils::validation::common::ensure_date_order;
use sea_orm::{Set, TryIntoModel};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct PerformanceService {
    repo: Arc<PerformanceRepository>,
    employee_repo: Arc<EmployeeRepository>,
}

impl PerformanceService {
    pub fn new(repo: Arc<PerformanceRepository>, employee_repo: Arc<EmployeeRepository>) -> Self {
        Self {
            repo,
            employee_repo,
        }
    }

    pub async fn create_review(
        &self,
        actor: &UserClaims,
        payload: CreatePerformanceReviewRequest,
    ) -> AppResult<PerformanceReviewResponse> {
        AccessPolicy::ensure(actor, Resource::Performance, Action::Create)?;
        ensure_date_order(
            payload.review_period_start,
            payload.review_period_end,
            "review_period_start",
            "review_period_end",
        )?;

        if payload.reviewer_id == payload.employee_id {
            return Err(validation_error(
                "reviewer_id",
                "An employee cannot review themselves",
            ));
        }
        for (field, id) in [
            ("employee_id", payload.employee_id),
            ("reviewer_id", payload.reviewer_id),
        ] {
            if !self.employee_repo.exists(id).await? {
                return Err(validation_error(
                    field,
                    &format!("Employee {} does not exist", id),
                ));
            }
        }

        let review = self
            .repo
            .create(PerformanceActiveModel {
                employee_id: Set(payload.employee_id),
                reviewer_id: Set(payload.reviewer_id),
                review_date: Set(payload.review_date),
                review_period_start: Set(payload.review_period_start),
                review_period_end: Set(payload.review_period_end),
                overall_rating: Set(payload.overall_rating),
                technical_skills: Set(payload.technical_skills),
                communication: Set(payload.communication),
                teamwork: Set(payload.teamwork),
                leadership: Set(payload.leadership),
                initiative: Set(payload.initiative),
                strengths: Set(payload.strengths),
                areas_for_improvement: Set(payload.areas_for_improvement),
                goals: Set(payload.goals),
                comments: Set(payload.comments),
                ..Default::default()
            })
            .await?;

        info!(
            review_id = %review.id,
            employee_id = %review.employee_id,
            reviewer_id = %review.reviewer_id,
            "Performance review created"
        );
        Ok(review.into())
    }

    pub async fn get_review(&self, id: Uuid) -> AppResult<PerformanceReviewResponse> {
        Ok(self.find(id).await?.into())
    }

    pub async fn list_reviews(
        &self,
        employee_id: Option<Uuid>,
    ) -> AppResult<Vec<PerformanceReviewResponse>> {
        let reviews = self.repo.find_all(employee_id).await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    /// 更新後のレコードが「確認済みなら完了済み」を満たすこと
    pub async fn update_review(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdatePerformanceReviewRequest,
    ) -> AppResult<PerformanceReviewResponse> {
        AccessPolicy::ensure(actor, Resource::Performance, Action::Update)?;

        let review = self.find(id).await?;
        let mut active: PerformanceActiveModel = review.into();

        if let Some(review_date) = payload.review_date {
            active.review_date = Set(review_date);
        }
        if let Some(start) = payload.review_period_start {
            active.review_period_start = Set(start);
        }
        if let Some(end) = payload.review_period_end {
            active.review_period_end = Set(end);
        }
        if let Some(rating) = payload.overall_rating {
            active.overall_rating = Set(rating);
        }
        if let Some(rating) = payload.technical_skills {
            active.technical_skills = Set(Some(rating));
        }
        if let Some(rating) = payload.communication {
            active.communication = Set(Some(rating));
        }
        if let Some(rating) = payload.teamwork {
            active.teamwork = Set(Some(rating));
        }
        if let Some(rating) = payload.leadership {
            active.leadership = Set(Some(rating));
        }
        if let Some(rating) = payload.initiative {
            active.initiative = Set(Some(rating));
        }
        if let Some(strengths) = payload.strengths {
            active.strengths = Set(Some(strengths));
        }
        if let Some(areas) = payload.areas_for_improvement {
            active.areas_for_improvement = Set(Some(areas));
        }
        if let Some(goals) = payload.goals {
            active.goals = Set(Some(goals));
        }
        if let Some(comments) = payload.comments {
            active.comments = Set(Some(comments));
        }
        if let Some(is_completed) = payload.is_completed {
            active.is_completed = Set(is_completed);
        }
        if let Some(acknowledged) = payload.employee_acknowledged {
            active.employee_acknowledged = Set(acknowledged);
        }

        let merged = active
            .clone()
            .try_into_model()
            .map_err(|e| validation_error("review", &e.to_string()))?;
        ensure_consistent(&merged)?;

        let updated = self.repo.update(active).await?;
        info!(
            review_id = %updated.id,
            is_completed = updated.is_completed,
            updated_by = %actor.user_id,
            "Performance review updated"
        );
        Ok(updated.into())
    }

    /// 完了済みの評価を本人確認済みにする
    pub async fn acknowledge_review(
        &self,
        actor: &UserClaims,
        id: Uuid,
    ) -> AppResult<PerformanceReviewResponse> {
        AccessPolicy::ensure(actor, Resource::Performance, Action::Acknowledge)?;

        let review = self.find(id).await?;

        // 一般従業員は自分の評価のみ確認できる
        if actor.role == UserRole::Employee {
            let own = self
                .employee_repo
                .find_by_user_id(actor.user_id)
                .await?
                .is_some_and(|employee| employee.id == review.employee_id);
            if !own {
                return Err(forbidden_error(
                    "Only the reviewed employee can acknowledge this review",
                    "performance_service::acknowledge_review",
                    &actor.user_id.to_string(),
                ));
            }
        }

        if !review.is_completed {
            return Err(validation_error(
                "employee_acknowledged",
                "Review must be completed before it can be acknowledged",
            ));
        }

        let mut active: PerformanceActiveModel = review.into();
        active.employee_acknowledged = Set(true);

        let updated = self.repo.update(active).await?;
        info!(review_id = %updated.id, user_id = %actor.user_id, "Performance review acknowledged");
        Ok(updated.into())
    }

    async fn find(&self, id: Uuid) -> AppResult<performance_model::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Performance review", id))
    }
}

fn ensure_consistent(review: &performance_model::Model) -> AppResult<()> {
    if !review.period_is_valid() {
        return Err(validation_error(
            "review_period_start",
            "must be on or before review_period_end",
        ));
    }
    if !review.acknowledgment_is_consistent() {
        return Err(validation_error(
            "employee_acknowledged",
            "Review must be completed before it can be acknowledged",
        ));
    }
    Ok(())
}
