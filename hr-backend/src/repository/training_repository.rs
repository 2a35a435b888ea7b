// src/repository/training_repository.rs

use crate::domain::training_model::{
    self, ActiveModel as TrainingActiveModel, Entity as TrainingEntity,
};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryFilter, QueryOrder};
use uuid::Uuid;

#[derive(Debug)]
pub struct TrainingRepository {
    db: DbConn,
}

impl TrainingRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<training_model::Model>, DbErr> {
        TrainingEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(
        &self,
        employee_id: Option<Uuid>,
    ) -> Result<Vec<training_model::Model>, DbErr> {
        let mut query = TrainingEntity::find();
        if let Some(employee_id) = employee_id {
            query = query.filter(training_model::Column::EmployeeId.eq(employee_id));
        }
        query
            .order_by_asc(training_model::Column::CreatedAt)
            .order_by_asc(training_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        active: TrainingActiveModel,
    ) -> Result<training_model::Model, DbErr> {
        active.insert(&self.db).await
    }

    pub async fn update(
        &self,
        active: TrainingActiveModel,
    ) -> Result<training_model::Model, DbErr> {
        active.update(&self.db).await
    }
}
