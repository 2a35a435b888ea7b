// src/api/dto/department_dto.rs
use crate::domain::department_model;
use crate::utils::validation::common::{department, required};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(length(
        min = required::MIN_LENGTH,
        max = department::NAME_MAX_LENGTH,
        message = "Department name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub description: Option<String>,

    pub manager_id: Option<Uuid>,
}

/// 部署更新リクエスト。`is_active = false` で無効化する
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = required::MIN_LENGTH, max = department::NAME_MAX_LENGTH))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub manager_id: Option<Uuid>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<department_model::Model> for DepartmentResponse {
    fn from(model: department_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            manager_id: model.manager_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
