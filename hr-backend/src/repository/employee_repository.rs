// src/repository/employee_repository.rs

use crate::domain::absence_model::{self, Entity as AbsenceEntity};
use crate::domain::department_model::{self, Entity as DepartmentEntity};
use crate::domain::document_model::{self, Entity as DocumentEntity};
use crate::domain::employee_model::{
    self, ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity,
};
use crate::domain::performance_model::{self, Entity as PerformanceEntity};
use crate::domain::training_model::{self, Entity as TrainingEntity};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    Condition, ConnectionTrait, DbConn, DbErr, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

/// 従業員を参照している記録の件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependentCounts {
    pub absences: u64,
    pub performance_reviews: u64,
    pub training_records: u64,
    pub documents: u64,
}

impl DependentCounts {
    pub fn total(&self) -> u64 {
        self.absences + self.performance_reviews + self.training_records + self.documents
    }
}

#[derive(Debug)]
pub struct EmployeeRepository {
    db: DbConn,
}

impl EmployeeRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<employee_model::Model>, DbErr> {
        Self::find_by_id_with(&self.db, id).await
    }

    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<employee_model::Model>, DbErr> {
        EmployeeEntity::find()
            .filter(employee_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    /// 作成順で skip / limit 件を返す
    pub async fn find_page(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<employee_model::Model>, DbErr> {
        EmployeeEntity::find()
            .order_by_asc(employee_model::Column::CreatedAt)
            .order_by_asc(employee_model::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
    }

    /// 部署の全従業員（有効フラグは問わない）
    pub async fn find_by_department(
        &self,
        department_id: Uuid,
    ) -> Result<Vec<employee_model::Model>, DbErr> {
        EmployeeEntity::find()
            .filter(employee_model::Column::DepartmentId.eq(department_id))
            .order_by_asc(employee_model::Column::CreatedAt)
            .order_by_asc(employee_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        Ok(EmployeeEntity::find_by_id(id).count(&self.db).await? > 0)
    }

    pub async fn create(
        &self,
        active: EmployeeActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        active.insert(&self.db).await
    }

    // --- トランザクション内で使う操作 ---

    pub async fn find_by_id_with<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<employee_model::Model>, DbErr> {
        EmployeeEntity::find_by_id(id).one(conn).await
    }

    /// 上長IDのみを取得する
    pub async fn manager_id_of<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Option<Uuid>>, DbErr> {
        Ok(EmployeeEntity::find_by_id(id)
            .one(conn)
            .await?
            .map(|employee| employee.manager_id))
    }

    pub async fn update_with<C: ConnectionTrait>(
        conn: &C,
        active: EmployeeActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        active.update(conn).await
    }

    pub async fn count_dependents<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<DependentCounts, DbErr> {
        let absences = AbsenceEntity::find()
            .filter(
                Condition::any()
                    .add(absence_model::Column::EmployeeId.eq(id))
                    .add(absence_model::Column::ApprovedBy.eq(id)),
            )
            .count(conn)
            .await?;

        let performance_reviews = PerformanceEntity::find()
            .filter(
                Condition::any()
                    .add(performance_model::Column::EmployeeId.eq(id))
                    .add(performance_model::Column::ReviewerId.eq(id)),
            )
            .count(conn)
            .await?;

        let training_records = TrainingEntity::find()
            .filter(training_model::Column::EmployeeId.eq(id))
            .count(conn)
            .await?;

        let documents = DocumentEntity::find()
            .filter(document_model::Column::EmployeeId.eq(id))
            .count(conn)
            .await?;

        Ok(DependentCounts {
            absences,
            performance_reviews,
            training_records,
            documents,
        })
    }

    /// 部下と管轄部署から上長参照を外す
    pub async fn release_managed<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<(), DbErr> {
        let now = Utc::now();

        EmployeeEntity::update_many()
            .col_expr(
                employee_model::Column::ManagerId,
                Expr::value(Option::<Uuid>::None),
            )
            .col_expr(employee_model::Column::UpdatedAt, Expr::value(now))
            .filter(employee_model::Column::ManagerId.eq(id))
            .exec(conn)
            .await?;

        DepartmentEntity::update_many()
            .col_expr(
                department_model::Column::ManagerId,
                Expr::value(Option::<Uuid>::None),
            )
            .col_expr(department_model::Column::UpdatedAt, Expr::value(now))
            .filter(department_model::Column::ManagerId.eq(id))
            .exec(conn)
            .await?;

        Ok(())
    }

    pub async fn delete_with<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<u64, DbErr> {
        let result = EmployeeEntity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected)
    }
}
