// src/repository/document_repository.rs

use crate::domain::document_model::{
    self, ActiveModel as DocumentActiveModel, Entity as DocumentEntity,
};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryFilter, QueryOrder};
use uuid::Uuid;

#[derive(Debug)]
pub struct DocumentRepository {
    db: DbConn,
}

impl DocumentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<document_model::Model>, DbErr> {
        DocumentEntity::find_by_id(id).one(&self.db).await
    }

    /// 作成順で返す
    pub async fn find_all(
        &self,
        employee_id: Option<Uuid>,
    ) -> Result<Vec<document_model::Model>, DbErr> {
        let mut query = DocumentEntity::find();
        if let Some(employee_id) = employee_id {
            query = query.filter(document_model::Column::EmployeeId.eq(employee_id));
        }
        query
            .order_by_asc(document_model::Column::CreatedAt)
            .order_by_asc(document_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        active: DocumentActiveModel,
    ) -> Result<document_model::Model, DbErr> {
        active.insert(&self.db).await
    }

    pub async fn update(
        &self,
        active: DocumentActiveModel,
    ) -> Result<document_model::Model, DbErr> {
        active.update(&self.db).await
    }
}
