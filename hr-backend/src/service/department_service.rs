// src/service/department_service.rs
use crate::api::dto::department_dto::{
    CreateDepartmentRequest, DepartmentResponse, UpdateDepartmentRequest,
};
use crate::domain::department_model::ActiveModel as DepartmentActiveModel;
use crate::domain::user_model::UserClaims;
use crate::error::AppResult;
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use crate::utils::permission::{AccessPolicy, Action, Resource};
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct DepartmentService {
    repo: Arc<DepartmentRepository>,
    employee_repo: Arc<EmployeeRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<DepartmentRepository>, employee_repo: Arc<EmployeeRepository>) -> Self {
        Self {
            repo,
            employee_repo,
        }
    }

    pub async fn create_department(
        &self,
        actor: &UserClaims,
        payload: CreateDepartmentRequest,
    ) -> AppResult<DepartmentResponse> {
        AccessPolicy::ensure(actor, Resource::Department, Action::Create)?;

        if let Some(manager_id) = payload.manager_id {
            self.ensure_manager_exists(manager_id).await?;
        }

        let department = self
            .repo
            .create(DepartmentActiveModel {
                name: Set(payload.name),
                description: Set(payload.description),
                manager_id: Set(payload.manager_id),
                ..Default::default()
            })
            .await?;

        info!(
            department_id = %department.id,
            name = %department.name,
            created_by = %actor.user_id,
            "Department created"
        );
        Ok(department.into())
    }

    /// 有効な部署の一覧
    pub async fn list_departments(&self) -> AppResult<Vec<DepartmentResponse>> {
        let departments = self.repo.find_active().await?;
        Ok(departments.into_iter().map(Into::into).collect())
    }

    pub async fn get_department(&self, id: Uuid) -> AppResult<DepartmentResponse> {
        let department = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Department", id))?;
        Ok(department.into())
    }

    /// 部署の更新（`is_active = false` で無効化）
    pub async fn update_department(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateDepartmentRequest,
    ) -> AppResult<DepartmentResponse> {
        AccessPolicy::ensure(actor, Resource::Department, Action::Update)?;

        let department = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Department", id))?;

        if let Some(manager_id) = payload.manager_id {
            self.ensure_manager_exists(manager_id).await?;
        }

        let mut active: DepartmentActiveModel = department.into();
        if let Some(name) = payload.name {
            active.name = Set(name);
        }
        if let Some(description) = payload.description {
            active.description = Set(Some(description));
        }
        if let Some(manager_id) = payload.manager_id {
            active.manager_id = Set(Some(manager_id));
        }
        if let Some(is_active) = payload.is_active {
            active.is_active = Set(is_active);
        }

        let updated = self.repo.update(active).await?;
        info!(
            department_id = %updated.id,
            is_active = updated.is_active,
            updated_by = %actor.user_id,
            "Department updated"
        );
        Ok(updated.into())
    }

    async fn ensure_manager_exists(&self, manager_id: Uuid) -> AppResult<()> {
        if !self.employee_repo.exists(manager_id).await? {
            return Err(validation_error(
                "manager_id",
                &format!("Employee {} does not exist", manager_id),
            ));
        }
        Ok(())
    }
}
