// tests/common/app_helper.rs

use axum::Router;
use hr_backend::api::{create_router, AppState};
use hr_backend::config::AppConfig;
use hr_backend::utils::jwt::JwtManager;
use hr_backend::utils::password::PasswordManager;
use std::sync::Arc;

use crate::common;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: common::db::TestDatabase,
}

/// 全ルートを備えたアプリのセットアップ
pub async fn setup_app() -> TestApp {
    setup_app_with_config(AppConfig::for_testing()).await
}

pub async fn setup_app_with_config(app_config: AppConfig) -> TestApp {
    common::init_test_env();

    let db = common::db::TestDatabase::new().await;

    let password_manager = Arc::new(
        PasswordManager::new(
            app_config.password.argon2.clone(),
            app_config.password.policy.clone(),
        )
        .unwrap(),
    );
    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone()).unwrap());

    let state = AppState::new(
        db.connection.clone(),
        app_config,
        jwt_manager,
        password_manager,
    );
    let router = create_router(state.clone());

    TestApp { router, state, db }
}
