// src/domain/performance_model.rs
use super::performance_rating::PerformanceRating;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "performance_reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_id: Uuid,
    pub reviewer_id: Uuid,
    pub review_date: NaiveDate,
    pub review_period_start: NaiveDate,
    pub review_period_end: NaiveDate,
    pub overall_rating: PerformanceRating,
    #[sea_orm(nullable)]
    pub technical_skills: Option<PerformanceRating>,
    #[sea_orm(nullable)]
    pub communication: Option<PerformanceRating>,
    #[sea_orm(nullable)]
    pub teamwork: Option<PerformanceRating>,
    #[sea_orm(nullable)]
    pub leadership: Option<PerformanceRating>,
    #[sea_orm(nullable)]
    pub initiative: Option<PerformanceRating>,
    #[sea_orm(column_type = "Text", nullable)]
    pub strengths: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub areas_for_improvement: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub goals: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub is_completed: bool,
    pub employee_acknowledged: bool,
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
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::ReviewerId",
        to = "super::employee_model::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Reviewer,
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
            is_completed: Set(false),
            employee_acknowledged: Set(false),
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
    /// 確認済みのレビューは必ず完了済みであること
    pub fn acknowledgment_is_consistent(&self) -> bool {
        !self.employee_acknowledged || self.is_completed
    }

    pub fn period_is_valid(&self) -> bool {
        self.review_period_start <= self.review_period_end
    }
}
