// src/repository/absence_repository.rs

use crate::domain::absence_model::{
    self, ActiveModel as AbsenceActiveModel, Entity as AbsenceEntity,
};
use crate::domain::absence_status::AbsenceStatus;
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::sea_query::Expr;
use sea_orm::{DbConn, DbErr, QueryFilter, QueryOrder};
use uuid::Uuid;

#[derive(Debug)]
pub struct AbsenceRepository {
    db: DbConn,
}

impl AbsenceRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<absence_model::Model>, DbErr> {
        AbsenceEntity::find_by_id(id).one(&self.db).await
    }

    /// 作成順。従業員IDで絞り込み可能
    pub async fn find_all(
        &self,
        employee_id: Option<Uuid>,
    ) -> Result<Vec<absence_model::Model>, DbErr> {
        let mut query = AbsenceEntity::find();
        if let Some(employee_id) = employee_id {
            query = query.filter(absence_model::Column::EmployeeId.eq(employee_id));
        }
        query
            .order_by_asc(absence_model::Column::CreatedAt)
            .order_by_asc(absence_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(&self, active: AbsenceActiveModel) -> Result<absence_model::Model, DbErr> {
        active.insert(&self.db).await
    }

    pub async fn update(&self, active: AbsenceActiveModel) -> Result<absence_model::Model, DbErr> {
        active.update(&self.db).await
    }

    /// pending の申請だけを `next` へ更新する。
    ///
    /// 状態の確認と書き込みを1文で行うため、同時に遷移した側は0件になる。
    /// `approved_by` を渡すと承認者と承認日時も記録する。
    pub async fn transition_from_pending(
        &self,
        id: Uuid,
        next: AbsenceStatus,
        approved_by: Option<Uuid>,
    ) -> Result<u64, DbErr> {
        let now = Utc::now();
        let mut update = AbsenceEntity::update_many()
            .col_expr(absence_model::Column::Status, Expr::value(next))
            .col_expr(absence_model::Column::UpdatedAt, Expr::value(now));
        if let Some(approver_id) = approved_by {
            update = update
                .col_expr(absence_model::Column::ApprovedBy, Expr::value(Some(approver_id)))
                .col_expr(absence_model::Column::ApprovedAt, Expr::value(Some(now)));
        }

        let result = update
            .filter(absence_model::Column::Id.eq(id))
            .filter(absence_model::Column::Status.eq(AbsenceStatus::Pending))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
