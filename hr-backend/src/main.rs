// src/main.rs
use hr_backend::api::{create_router, AppState};
use hr_backend::config::AppConfig;
use hr_backend::db::{create_db_pool, run_migrations};
use hr_backend::utils::jwt::JwtManager;
use hr_backend::utils::password::PasswordManager;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting HR backend server...");

    let app_config = AppConfig::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        addr = %app_config.server_addr(),
        "Configuration loaded"
    );

    let db_pool = create_db_pool(&app_config.database).await?;
    run_migrations(&db_pool).await?;
    tracing::info!("Database ready");

    let jwt_manager = Arc::new(JwtManager::new(app_config.jwt.clone())?);
    let password_manager = Arc::new(PasswordManager::new(
        app_config.password.argon2.clone(),
        app_config.password.policy.clone(),
    )?);

    let initial_admin = app_config.auth.initial_admin.clone();
    let server_addr = app_config.server_addr();
    let app_state = AppState::new(db_pool, app_config, jwt_manager, password_manager);

    if let Some(admin) = initial_admin {
        app_state.auth_service.ensure_initial_admin(&admin).await?;
    }

    let app = create_router(app_state);

    let listener = TcpListener::bind(&server_addr).await?;
    tracing::info!("Server listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
