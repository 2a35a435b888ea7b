use sea_orm_migration::prelude::*;

use crate::m20250801_000003_create_employees_table::Employees;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Absences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Absences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Absences::EmployeeId).uuid().not_null())
                    .col(
                        ColumnDef::new(Absences::AbsenceType)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Absences::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Absences::StartDate).date().not_null())
                    .col(ColumnDef::new(Absences::EndDate).date().not_null())
                    .col(ColumnDef::new(Absences::TotalDays).double().not_null())
                    .col(ColumnDef::new(Absences::Reason).text().null())
                    .col(ColumnDef::new(Absences::Notes).text().null())
                    .col(ColumnDef::new(Absences::ApprovedBy).uuid().null())
                    .col(
                        ColumnDef::new(Absences::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Absences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Absences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_absences_employee_id")
                            .from(Absences::Table, Absences::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_absences_approved_by")
                            .from(Absences::Table, Absences::ApprovedBy)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Absences::Table)
                    .name("idx_absences_employee_id")
                    .col(Absences::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Absences::Table)
                    .name("idx_absences_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Absences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Absences {
    Table,
    Id,
    EmployeeId,
    AbsenceType,
    Status,
    StartDate,
    EndDate,
    TotalDays,
    Reason,
    Notes,
    ApprovedBy,
    ApprovedAt,
    CreatedAt,
    UpdatedAt,
}
