// src/db.rs
use crate::config::app::DatabaseConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

pub type DbPool = DatabaseConnection;

pub async fn create_db_pool(config: &DatabaseConfig) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    // インメモリSQLiteは接続ごとに別DBになるため、接続を使い回す
    if config.url.contains(":memory:") {
        opt.max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(24 * 60 * 60))
            .max_lifetime(Duration::from_secs(24 * 60 * 60));
    } else {
        opt.idle_timeout(Duration::from_secs(8))
            .max_lifetime(Duration::from_secs(8 * 60));
    }

    Database::connect(opt).await
}

/// 未適用のマイグレーションを実行
pub async fn run_migrations(db: &DbPool) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
