// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 認証関連マイグレーション
mod m20250801_000001_create_users_table;

// 組織関連マイグレーション
mod m20250801_000002_create_departments_table;
mod m20250801_000003_create_employees_table;

// 従業員レコード関連マイグレーション
mod m20250801_000004_create_absences_table;
mod m20250801_000005_create_performance_reviews_table;
mod m20250801_000006_create_training_records_table;
mod m20250801_000007_create_documents_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users_table::Migration),
            Box::new(m20250801_000002_create_departments_table::Migration),
            Box::new(m20250801_000003_create_employees_table::Migration),
            Box::new(m20250801_000004_create_absences_table::Migration),
            Box::new(m20250801_000005_create_performance_reviews_table::Migration),
            Box::new(m20250801_000006_create_training_records_table::Migration),
            Box::new(m20250801_000007_create_documents_table::Migration),
        ]
    }
}
