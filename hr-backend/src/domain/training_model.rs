// src/domain/training_model.rs
use super::training_status::{TrainingStatus, TrainingType};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "training_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub training_type: TrainingType,
    #[sea_orm(nullable)]
    pub provider: Option<String>,
    #[sea_orm(nullable)]
    pub start_date: Option<NaiveDate>,
    #[sea_orm(nullable)]
    pub end_date: Option<NaiveDate>,
    #[sea_orm(nullable)]
    pub due_date: Option<NaiveDate>,
    #[sea_orm(nullable)]
    pub completion_date: Option<NaiveDate>,
    pub status: TrainingStatus,
    #[sea_orm(column_type = "Double")]
    pub progress_percentage: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub score: Option<f64>,
    #[sea_orm(nullable)]
    pub certificate_number: Option<String>,
    #[sea_orm(nullable)]
    pub expiry_date: Option<NaiveDate>,
    #[sea_orm(column_type = "Double", nullable)]
    pub cost: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub duration_hours: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Employee,
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            status: Set(TrainingStatus::NotStarted),
            progress_percentage: Set(0.0),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl Model {
    /// 基準日時点での実効ステータス
    pub fn effective_status(&self, today: NaiveDate) -> TrainingStatus {
        self.status.effective(self.due_date, self.expiry_date, today)
    }
}
