// tests/common/db.rs
//! テストごとに独立したインメモリSQLiteデータベース

use hr_backend::config::AppConfig;
use hr_backend::db::{create_db_pool, run_migrations};
use sea_orm::DatabaseConnection;

pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let config = AppConfig::for_testing();
        let connection = create_db_pool(&config.database)
            .await
            .expect("connect in-memory sqlite");

        run_migrations(&connection).await.expect("run migrations");

        Self { connection }
    }
}
