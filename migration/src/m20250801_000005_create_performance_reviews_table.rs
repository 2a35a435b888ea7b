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
                    .table(PerformanceReviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PerformanceReviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewerId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewPeriodStart)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::ReviewPeriodEnd)
                            .date()
                            .not_null(),
                    )
                    // 評価は 1..=5 の整数で保存
                    .col(
                        ColumnDef::new(PerformanceReviews::OverallRating)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::TechnicalSkills)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Communication)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Teamwork)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Leadership)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Initiative)
                            .integer()
                            .null(),
                    )
                    .col(ColumnDef::new(PerformanceReviews::Strengths).text().null())
                    .col(
                        ColumnDef::new(PerformanceReviews::AreasForImprovement)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(PerformanceReviews::Goals).text().null())
                    .col(ColumnDef::new(PerformanceReviews::Comments).text().null())
                    .col(
                        ColumnDef::new(PerformanceReviews::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::EmployeeAcknowledged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_reviews_employee_id")
                            .from(PerformanceReviews::Table, PerformanceReviews::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_reviews_reviewer_id")
                            .from(PerformanceReviews::Table, PerformanceReviews::ReviewerId)
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
                    .table(PerformanceReviews::Table)
                    .name("idx_performance_reviews_employee_id")
                    .col(PerformanceReviews::EmployeeId)
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
                    .table(PerformanceReviews::Table)
                    .name("idx_performance_reviews_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PerformanceReviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PerformanceReviews {
    Table,
    Id,
    EmployeeId,
    ReviewerId,
    ReviewDate,
    ReviewPeriodStart,
    ReviewPeriodEnd,
    OverallRating,
    TechnicalSkills,
    Communication,
    Teamwork,
    Leadership,
    Initiative,
    Strengths,
    AreasForImprovement,
    Goals,
    Comments,
    IsCompleted,
    EmployeeAcknowledged,
    CreatedAt,
    UpdatedAt,
}
