// src/domain/document_model.rs
use super::document_status::{DocumentStatus, DocumentType};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub document_type: DocumentType,
    /// 外部ストレージ上の参照（このサービスはファイル本体を扱わない）
    pub file_path: String,
    pub file_name: String,
    #[sea_orm(nullable)]
    pub file_size: Option<i64>,
    #[sea_orm(nullable)]
    pub mime_type: Option<String>,
    pub status: DocumentStatus,
    pub upload_date: DateTime<Utc>,
    #[sea_orm(nullable)]
    pub expiry_date: Option<NaiveDate>,
    #[sea_orm(nullable)]
    pub archived_date: Option<DateTime<Utc>>,
    #[sea_orm(column_type = "Text", nullable)]
    pub tags: Option<String>,
    pub version: String,
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
        let now = Utc::now();
        Self {
            id: Set(Uuid::new_v4()),
            status: Set(DocumentStatus::Active),
            upload_date: Set(now),
            version: Set("1.0".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
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
    pub fn effective_status(&self, today: NaiveDate) -> DocumentStatus {
        self.status.effective(self.expiry_date, today)
    }
}
