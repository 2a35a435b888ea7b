use sea_orm_migration::prelude::*;

use crate::m20250801_000001_create_users_table::Users;
use crate::m20250801_000002_create_departments_table::Departments;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 外部キーはSQLiteでも適用できるようテーブル作成時に定義する
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Employees::EmployeeId)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::UserId).uuid().null())
                    .col(ColumnDef::new(Employees::DepartmentId).uuid().null())
                    .col(
                        ColumnDef::new(Employees::FirstName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Employees::LastName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::DateOfBirth).date().null())
                    .col(ColumnDef::new(Employees::Gender).string_len(20).null())
                    .col(ColumnDef::new(Employees::Phone).string_len(20).null())
                    .col(ColumnDef::new(Employees::Address).text().null())
                    .col(ColumnDef::new(Employees::HireDate).date().not_null())
                    .col(
                        ColumnDef::new(Employees::Position)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::Salary).double().null())
                    .col(
                        ColumnDef::new(Employees::EmploymentType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Employees::ManagerId).uuid().null())
                    .col(
                        ColumnDef::new(Employees::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Employees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Employees::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_user_id")
                            .from(Employees::Table, Employees::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_department_id")
                            .from(Employees::Table, Employees::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_manager_id")
                            .from(Employees::Table, Employees::ManagerId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .table(Employees::Table)
                    .name("uq_employees_employee_id")
                    .col(Employees::EmployeeId)
                    .to_owned(),
            )
            .await?;

        // ユーザーとの関連は 1:1（NULLは複数可）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .table(Employees::Table)
                    .name("uq_employees_user_id")
                    .col(Employees::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Employees::Table)
                    .name("idx_employees_department_id")
                    .col(Employees::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Employees::Table)
                    .name("idx_employees_manager_id")
                    .col(Employees::ManagerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_employees_manager_id",
            "idx_employees_department_id",
            "uq_employees_user_id",
            "uq_employees_employee_id",
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .if_exists()
                        .table(Employees::Table)
                        .name(name)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Employees {
    Table,
    Id,
    EmployeeId,
    UserId,
    DepartmentId,
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Phone,
    Address,
    HireDate,
    Position,
    Salary,
    EmploymentType,
    ManagerId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
