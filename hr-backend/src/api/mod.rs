// src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::middleware::auth::{cors_layer, HasJwtManager};
use crate::repository::{
    absence_repository::AbsenceRepository, department_repository::DepartmentRepository,
    document_repository::DocumentRepository, employee_repository::EmployeeRepository,
    performance_repository::PerformanceRepository, training_repository::TrainingRepository,
    user_repository::UserRepository,
};
use crate::service::{
    absence_service::AbsenceService, auth_service::AuthService,
    department_service::DepartmentService, document_service::DocumentService,
    employee_service::EmployeeService, performance_service::PerformanceService,
    training_service::TrainingService,
};
use crate::utils::jwt::JwtManager;
use crate::utils::password::PasswordManager;
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub mod dto;
pub mod handlers;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub employee_service: Arc<EmployeeService>,
    pub department_service: Arc<DepartmentService>,
    pub absence_service: Arc<AbsenceService>,
    pub performance_service: Arc<PerformanceService>,
    pub training_service: Arc<TrainingService>,
    pub document_service: Arc<DocumentService>,
    pub jwt_manager: Arc<JwtManager>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// リポジトリとサービスを組み立てる
    pub fn new(
        db: DbPool,
        config: AppConfig,
        jwt_manager: Arc<JwtManager>,
        password_manager: Arc<PasswordManager>,
    ) -> Self {
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let employee_repo = Arc::new(EmployeeRepository::new(db.clone()));
        let department_repo = Arc::new(DepartmentRepository::new(db.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(
                user_repo.clone(),
                password_manager,
                jwt_manager.clone(),
                config.auth.allow_self_assigned_roles,
            )),
            employee_service: Arc::new(EmployeeService::new(
                db.clone(),
                employee_repo.clone(),
                department_repo.clone(),
                user_repo,
            )),
            department_service: Arc::new(DepartmentService::new(
                department_repo,
                employee_repo.clone(),
            )),
            absence_service: Arc::new(AbsenceService::new(
                Arc::new(AbsenceRepository::new(db.clone())),
                employee_repo.clone(),
            )),
            performance_service: Arc::new(PerformanceService::new(
                Arc::new(PerformanceRepository::new(db.clone())),
                employee_repo.clone(),
            )),
            training_service: Arc::new(TrainingService::new(
                Arc::new(TrainingRepository::new(db.clone())),
                employee_repo.clone(),
            )),
            document_service: Arc::new(DocumentService::new(
                Arc::new(DocumentRepository::new(db)),
                employee_repo,
            )),
            jwt_manager,
            config: Arc::new(config),
        }
    }
}

impl HasJwtManager for AppState {
    fn jwt_manager(&self) -> &Arc<JwtManager> {
        &self.jwt_manager
    }
}

/// 全ルートとミドルウェアを束ねたルーター
pub fn create_router(app_state: AppState) -> Router {
    let config = app_state.config.clone();

    let api = Router::new()
        .merge(handlers::auth_handler::auth_router(app_state.clone()))
        .merge(handlers::employee_handler::employee_router(app_state.clone()))
        .merge(handlers::department_handler::department_router(app_state.clone()))
        .merge(handlers::absence_handler::absence_router(app_state.clone()))
        .merge(handlers::performance_handler::performance_router(app_state.clone()))
        .merge(handlers::training_handler::training_router(app_state.clone()))
        .merge(handlers::document_handler::document_router(app_state));

    Router::new()
        .merge(handlers::system_handler::system_router())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.server.body_limit))
}
