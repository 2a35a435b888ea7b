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
                    .table(TrainingRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TrainingRecords::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingRecords::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TrainingRecords::Description).text().null())
                    .col(
                        ColumnDef::new(TrainingRecords::TrainingType)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingRecords::Provider)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(TrainingRecords::StartDate).date().null())
                    .col(ColumnDef::new(TrainingRecords::EndDate).date().null())
                    .col(ColumnDef::new(TrainingRecords::DueDate).date().null())
                    .col(
                        ColumnDef::new(TrainingRecords::CompletionDate)
                            .date()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TrainingRecords::Status)
                            .string_len(20)
                            .not_null()
                            .default("not_started"),
                    )
                    .col(
                        ColumnDef::new(TrainingRecords::ProgressPercentage)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(TrainingRecords::Score).double().null())
                    .col(
                        ColumnDef::new(TrainingRecords::CertificateNumber)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(TrainingRecords::ExpiryDate).date().null())
                    .col(ColumnDef::new(TrainingRecords::Cost).double().null())
                    .col(
                        ColumnDef::new(TrainingRecords::DurationHours)
                            .double()
                            .null(),
                    )
                    .col(ColumnDef::new(TrainingRecords::Notes).text().null())
                    .col(
                        ColumnDef::new(TrainingRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TrainingRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_records_employee_id")
                            .from(TrainingRecords::Table, TrainingRecords::EmployeeId)
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
                    .table(TrainingRecords::Table)
                    .name("idx_training_records_employee_id")
                    .col(TrainingRecords::EmployeeId)
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
                    .table(TrainingRecords::Table)
                    .name("idx_training_records_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrainingRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrainingRecords {
    Table,
    Id,
    EmployeeId,
    Title,
    Description,
    TrainingType,
    Provider,
    StartDate,
    EndDate,
    DueDate,
    CompletionDate,
    Status,
    ProgressPercentage,
    Score,
    CertificateNumber,
    ExpiryDate,
    Cost,
    DurationHours,
    Notes,
    CreatedAt,
    UpdatedAt,
}
