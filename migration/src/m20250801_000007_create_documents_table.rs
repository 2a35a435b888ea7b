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
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Documents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Documents::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Documents::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Documents::Description).text().null())
                    .col(
                        ColumnDef::new(Documents::DocumentType)
                            .string_len(30)
                            .not_null(),
                    )
                    // ファイル本体は外部ストレージ、ここでは参照のみ保持
                    .col(
                        ColumnDef::new(Documents::FilePath)
                            .string_len(500)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Documents::FileName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documents::FileSize).big_integer().null())
                    .col(ColumnDef::new(Documents::MimeType).string_len(100).null())
                    .col(
                        ColumnDef::new(Documents::Status)
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Documents::UploadDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Documents::ExpiryDate).date().null())
                    .col(
                        ColumnDef::new(Documents::ArchivedDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Documents::Tags).text().null())
                    .col(
                        ColumnDef::new(Documents::Version)
                            .string_len(20)
                            .not_null()
                            .default("1.0"),
                    )
                    .col(
                        ColumnDef::new(Documents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Documents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_employee_id")
                            .from(Documents::Table, Documents::EmployeeId)
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
                    .table(Documents::Table)
                    .name("idx_documents_employee_id")
                    .col(Documents::EmployeeId)
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
                    .table(Documents::Table)
                    .name("idx_documents_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Id,
    EmployeeId,
    Title,
    Description,
    DocumentType,
    FilePath,
    FileName,
    FileSize,
    MimeType,
    Status,
    UploadDate,
    ExpiryDate,
    ArchivedDate,
    Tags,
    Version,
    CreatedAt,
    UpdatedAt,
}
