// src/repository/department_repository.rs

use crate::domain::department_model::{
    self, ActiveModel as DepartmentActiveModel, Entity as DepartmentEntity,
};
use sea_orm::entity::*;
use sea_orm::{ConnectionTrait, DbConn, DbErr, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

#[derive(Debug)]
pub struct DepartmentRepository {
    db: DbConn,
}

impl DepartmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<department_model::Model>, DbErr> {
        DepartmentEntity::find_by_id(id).one(&self.db).await
    }

    /// 有効な部署のみ（作成順）
    pub async fn find_active(&self) -> Result<Vec<department_model::Model>, DbErr> {
        DepartmentEntity::find()
            .filter(department_model::Column::IsActive.eq(true))
            .order_by_asc(department_model::Column::CreatedAt)
            .order_by_asc(department_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        active: DepartmentActiveModel,
    ) -> Result<department_model::Model, DbErr> {
        active.insert(&self.db).await
    }

    pub async fn update(
        &self,
        active: DepartmentActiveModel,
    ) -> Result<department_model::Model, DbErr> {
        active.update(&self.db).await
    }

    pub async fn exists_with<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
        Ok(DepartmentEntity::find_by_id(id).count(conn).await? > 0)
    }
}
