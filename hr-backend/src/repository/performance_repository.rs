// src/repository/performance_repository.rs

use crate::domain::performance_model::{
    self, ActiveModel as PerformanceActiveModel, Entity as PerformanceEntity,
};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryFilter, QueryOrder};
use uuid::Uuid;

#[derive(Debug)]
pub struct PerformanceRepository {
    db: DbConn,
}

impl PerformanceRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<performance_model::Model>, DbErr> {
        PerformanceEntity::find_by_id(id).one(&self.db).await
    }

    /// 対象従業員で絞り込み可能（作成順）
    pub async fn find_all(
        &self,
        employee_id: Option<Uuid>,
    ) -> Result<Vec<performance_model::Model>, DbErr> {
        let mut query = PerformanceEntity::find();
        if let Some(employee_id) = employee_id {
            query = query.filter(performance_model::Column::EmployeeId.eq(employee_id));
        }
        query
            .order_by_asc(performance_model::Column::CreatedAt)
            .order_by_asc(performance_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        active: PerformanceActiveModel,
    ) -> Result<performance_model::Model, DbErr> {
        active.insert(&self.db).await
    }

    pub async fn update(
        &self,
        active: PerformanceActiveModel,
    ) -> Result<performance_model::Model, DbErr> {
        active.update(&self.db).await
    }
}
