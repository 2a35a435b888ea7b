// src/api/dto/employee_dto.rs
use crate::domain::employee_model;
use crate::utils::validation::common::{self, employee, required};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 従業員作成リクエスト
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(
        length(
            min = required::MIN_LENGTH,
            max = employee::CODE_MAX_LENGTH,
            message = "Employee ID must be between 1 and 20 characters"
        ),
        custom(function = common::validate_employee_code)
    )]
    pub employee_id: String,

    pub user_id: Option<Uuid>,
    pub department_id: Option<Uuid>,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = employee::NAME_MAX_LENGTH,
        message = "First name must be between 1 and 50 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = employee::NAME_MAX_LENGTH,
        message = "Last name must be between 1 and 50 characters"
    ))]
    pub last_name: String,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = employee::GENDER_MAX_LENGTH))]
    pub gender: Option<String>,

    #[validate(
        length(max = employee::PHONE_MAX_LENGTH),
        custom(function = common::validate_phone)
    )]
    pub phone: Option<String>,

    pub address: Option<String>,

    pub hire_date: NaiveDate,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = employee::POSITION_MAX_LENGTH,
        message = "Position must be between 1 and 100 characters"
    ))]
    pub position: String,

    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: Option<f64>,

    #[validate(length(
        min = required::MIN_LENGTH,
        max = employee::EMPLOYMENT_TYPE_MAX_LENGTH,
        message = "Employment type must be between 1 and 50 characters"
    ))]
    pub employment_type: String,

    pub manager_id: Option<Uuid>,

    pub is_active: Option<bool>,
}

/// 従業員更新リクエスト（指定されたフィールドのみ更新）
///
/// `employee_id` と `user_id` は作成後に変更できない。
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateEmployeeRequest {
    pub department_id: Option<Uuid>,

    #[validate(length(min = required::MIN_LENGTH, max = employee::NAME_MAX_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(min = required::MIN_LENGTH, max = employee::NAME_MAX_LENGTH))]
    pub last_name: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = employee::GENDER_MAX_LENGTH))]
    pub gender: Option<String>,

    #[validate(
        length(max = employee::PHONE_MAX_LENGTH),
        custom(function = common::validate_phone)
    )]
    pub phone: Option<String>,

    pub address: Option<String>,

    pub hire_date: Option<NaiveDate>,

    #[validate(length(min = required::MIN_LENGTH, max = employee::POSITION_MAX_LENGTH))]
    pub position: Option<String>,

    #[validate(range(min = 0.0, message = "Salary must not be negative"))]
    pub salary: Option<f64>,

    #[validate(length(min = required::MIN_LENGTH, max = employee::EMPLOYMENT_TYPE_MAX_LENGTH))]
    pub employment_type: Option<String>,

    pub manager_id: Option<Uuid>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub employee_id: String,
    pub user_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub hire_date: NaiveDate,
    pub position: String,
    pub salary: Option<f64>,
    pub employment_type: String,
    pub manager_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<employee_model::Model> for EmployeeResponse {
    fn from(model: employee_model::Model) -> Self {
        Self {
            id: model.id,
            employee_id: model.employee_id,
            user_id: model.user_id,
            department_id: model.department_id,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            gender: model.gender,
            phone: model.phone,
            address: model.address,
            hire_date: model.hire_date,
            position: model.position,
            salary: model.salary,
            employment_type: model.employment_type,
            manager_id: model.manager_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
