// src/service/employee_service.rs
use crate::api::dto::employee_dto::{
    CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest,
};
use crate::db::DbPool;
use crate::domain::employee_model::ActiveModel as EmployeeActiveModel;
use crate::domain::user_model::UserClaims;
use crate::error::AppResult;
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::user_repository::UserRepository;
use crate::types::SkipLimitQuery;
use crate::utils::error_helper::{conflict_error, not_found_error, validation_error};
use crate::utils::permission::{AccessPolicy, Action, Resource};
use crate::utils::transaction::TransactionManager;
use sea_orm::{ConnectionTrait, Set};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct EmployeeService {
    db: DbPool,
    repo: Arc<EmployeeRepository>,
    department_repo: Arc<DepartmentRepository>,
    user_repo: Arc<UserRepository>,
}

impl EmployeeService {
    pub fn new(
        db: DbPool,
        repo: Arc<EmployeeRepository>,
        department_repo: Arc<DepartmentRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            db,
            repo,
            department_repo,
            user_repo,
        }
    }

    pub async fn create_employee(
        &self,
        actor: &UserClaims,
        payload: CreateEmployeeRequest,
    ) -> AppResult<EmployeeResponse> {
        AccessPolicy::ensure(actor, Resource::Employee, Action::Create)?;

        if let Some(department_id) = payload.department_id {
            if self.department_repo.find_by_id(department_id).await?.is_none() {
                return Err(validation_error(
                    "department_id",
                    &format!("Department {} does not exist", department_id),
                ));
            }
        }
        if let Some(user_id) = payload.user_id {
            if self.user_repo.find_by_id(user_id).await?.is_none() {
                return Err(validation_error(
                    "user_id",
                    &format!("User {} does not exist", user_id),
                ));
            }
        }
        if let Some(manager_id) = payload.manager_id {
            ensure_valid_manager(&self.db, None, manager_id).await?;
        }

        // 社員番号の重複はユニークインデックスで検出する
        let employee = self
            .repo
            .create(EmployeeActiveModel {
                employee_id: Set(payload.employee_id),
                user_id: Set(payload.user_id),
                department_id: Set(payload.department_id),
                first_name: Set(payload.first_name),
                last_name: Set(payload.last_name),
                date_of_birth: Set(payload.date_of_birth),
                gender: Set(payload.gender),
                phone: Set(payload.phone),
                address: Set(payload.address),
                hire_date: Set(payload.hire_date),
                position: Set(payload.position),
                salary: Set(payload.salary),
                employment_type: Set(payload.employment_type),
                manager_id: Set(payload.manager_id),
                is_active: Set(payload.is_active.unwrap_or(true)),
                ..Default::default()
            })
            .await?;

        info!(
            employee_id = %employee.id,
            employee_code = %employee.employee_id,
            created_by = %actor.user_id,
            "Employee created"
        );
        Ok(employee.into())
    }

    pub async fn get_employee(&self, id: Uuid) -> AppResult<EmployeeResponse> {
        let employee = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Employee", id))?;
        Ok(employee.into())
    }

    pub async fn list_employees(
        &self,
        query: SkipLimitQuery,
    ) -> AppResult<Vec<EmployeeResponse>> {
        let (skip, limit) = query.resolve();
        let employees = self.repo.find_page(skip, limit).await?;
        debug!(skip, limit, count = employees.len(), "Listed employees");
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_department(
        &self,
        department_id: Uuid,
    ) -> AppResult<Vec<EmployeeResponse>> {
        let employees = self.repo.find_by_department(department_id).await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    /// 指定フィールドのみ更新。参照チェックと書き込みを一つのトランザクションで行う
    pub async fn update_employee(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateEmployeeRequest,
    ) -> AppResult<EmployeeResponse> {
        AccessPolicy::ensure(actor, Resource::Employee, Action::Update)?;

        let updated = self
            .db
            .execute_in_transaction(move |txn| {
                Box::pin(async move {
                    let employee = EmployeeRepository::find_by_id_with(txn, id)
                        .await?
                        .ok_or_else(|| not_found_error("Employee", id))?;

                    if let Some(department_id) = payload.department_id {
                        if !DepartmentRepository::exists_with(txn, department_id).await? {
                            return Err(validation_error(
                                "department_id",
                                &format!("Department {} does not exist", department_id),
                            ));
                        }
                    }
                    if let Some(manager_id) = payload.manager_id {
                        ensure_valid_manager(txn, Some(id), manager_id).await?;
                    }

                    let mut active: EmployeeActiveModel = employee.into();
                    if let Some(department_id) = payload.department_id {
                        active.department_id = Set(Some(department_id));
                    }
                    if let Some(first_name) = payload.first_name {
                        active.first_name = Set(first_name);
                    }
                    if let Some(last_name) = payload.last_name {
                        active.last_name = Set(last_name);
                    }
                    if let Some(date_of_birth) = payload.date_of_birth {
                        active.date_of_birth = Set(Some(date_of_birth));
                    }
                    if let Some(gender) = payload.gender {
                        active.gender = Set(Some(gender));
                    }
                    if let Some(phone) = payload.phone {
                        active.phone = Set(Some(phone));
                    }
                    if let Some(address) = payload.address {
                        active.address = Set(Some(address));
                    }
                    if let Some(hire_date) = payload.hire_date {
                        active.hire_date = Set(hire_date);
                    }
                    if let Some(position) = payload.position {
                        active.position = Set(position);
                    }
                    if let Some(salary) = payload.salary {
                        active.salary = Set(Some(salary));
                    }
                    if let Some(employment_type) = payload.employment_type {
                        active.employment_type = Set(employment_type);
                    }
                    if let Some(manager_id) = payload.manager_id {
                        active.manager_id = Set(Some(manager_id));
                    }
                    if let Some(is_active) = payload.is_active {
                        active.is_active = Set(is_active);
                    }

                    Ok(EmployeeRepository::update_with(txn, active).await?)
                })
            })
            .await?;

        info!(employee_id = %id, updated_by = %actor.user_id, "Employee updated");
        Ok(updated.into())
    }

    /// 従業員の削除
    ///
    /// 休暇・評価・研修・書類のいずれかが参照している間は削除できない。
    /// 部下と管轄部署の上長参照は同じトランザクション内で外す。
    pub async fn delete_employee(&self, actor: &UserClaims, id: Uuid) -> AppResult<()> {
        AccessPolicy::ensure(actor, Resource::Employee, Action::Delete)?;

        self.db
            .execute_in_transaction(move |txn| {
                Box::pin(async move {
                    if EmployeeRepository::find_by_id_with(txn, id).await?.is_none() {
                        return Err(not_found_error("Employee", id));
                    }

                    let dependents = EmployeeRepository::count_dependents(txn, id).await?;
                    if dependents.total() > 0 {
                        return Err(conflict_error(
                            &format!(
                                "Employee {} still has {} absence, {} performance, {} training and {} document records",
                                id,
                                dependents.absences,
                                dependents.performance_reviews,
                                dependents.training_records,
                                dependents.documents
                            ),
                            "employee_service::delete_employee",
                        ));
                    }

                    EmployeeRepository::release_managed(txn, id).await?;
                    EmployeeRepository::delete_with(txn, id).await?;
                    Ok(())
                })
            })
            .await?;

        info!(employee_id = %id, deleted_by = %actor.user_id, "Employee deleted");
        Ok(())
    }
}

/// 上長として指定できるか検証する
///
/// 自分自身や、上長チェーンを辿って自分に戻る指定は循環になるため拒否する。
async fn ensure_valid_manager<C: ConnectionTrait>(
    conn: &C,
    employee_id: Option<Uuid>,
    manager_id: Uuid,
) -> AppResult<()> {
    if employee_id == Some(manager_id) {
        return Err(validation_error(
            "manager_id",
            "Employee cannot be their own manager",
        ));
    }

    let mut visited = HashSet::new();
    let mut cursor = manager_id;
    loop {
        if !visited.insert(cursor) {
            // 既存データ側のループ。今回の変更では新たな循環は生じない
            return Ok(());
        }

        let next = match EmployeeRepository::manager_id_of(conn, cursor).await? {
            Some(next) => next,
            None if cursor == manager_id => {
                return Err(validation_error(
                    "manager_id",
                    &format!("Employee {} does not exist", manager_id),
                ));
            }
            None => return Ok(()),
        };

        match next {
            Some(next) if Some(next) == employee_id => {
                return Err(validation_error(
                    "manager_id",
                    "Manager assignment would create a reporting cycle",
                ));
            }
            Some(next) => cursor = next,
            None => return Ok(()),
        }
    }
}
