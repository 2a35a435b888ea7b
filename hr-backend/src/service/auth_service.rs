// src/service/auth_service.rs
use crate::api::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::config::app::InitialAdmin;
use crate::domain::user_model::UserClaims;
use crate::domain::user_role::UserRole;
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::{NewUser, UserRepository};
use crate::utils::error_helper::{forbidden_error, internal_server_error};
use crate::utils::jwt::JwtManager;
use crate::utils::password::{PasswordError, PasswordManager};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// 認証サービス
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
    jwt_manager: Arc<JwtManager>,
    allow_self_assigned_roles: bool,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_manager: Arc<PasswordManager>,
        jwt_manager: Arc<JwtManager>,
        allow_self_assigned_roles: bool,
    ) -> Self {
        Self {
            user_repo,
            password_manager,
            jwt_manager,
            allow_self_assigned_roles,
        }
    }

    /// ユーザー登録
    pub async fn register(&self, payload: RegisterRequest) -> AppResult<UserResponse> {
        let role = payload.role.unwrap_or_default();
        if role != UserRole::Employee && !self.allow_self_assigned_roles {
            return Err(forbidden_error(
                &format!("Cannot self-assign role '{}'", role),
                "auth_service::register",
                &payload.email,
            ));
        }

        let password_hash = self.hash(&payload.password)?;

        // 重複はユニークインデックスで検出され DuplicateKey になる
        let user = self
            .user_repo
            .create(NewUser {
                email: payload.email,
                username: payload.username,
                password_hash,
                full_name: payload.full_name,
                role,
            })
            .await?;

        info!(
            user_id = %user.id,
            username = %user.username,
            role = %user.role,
            "User registered"
        );

        Ok(user.into())
    }

    /// ログインしてアクセストークンを発行
    pub async fn login(&self, payload: LoginRequest) -> AppResult<LoginResponse> {
        let user = match self.user_repo.find_by_email(&payload.email).await? {
            Some(user) if user.is_active => user,
            Some(_) => {
                warn!(email = %payload.email, "Login attempt for inactive user");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
            None => {
                warn!(email = %payload.email, "Login attempt for unknown email");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        let verified = self
            .password_manager
            .verify_password(&payload.password, &user.password_hash)
            .map_err(|e| {
                internal_server_error(e, "auth_service::login", "Failed to verify credentials")
            })?;

        if !verified {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let access_token = self
            .jwt_manager
            .generate_access_token(UserClaims::from(user.clone()))
            .map_err(|e| {
                internal_server_error(e, "auth_service::login", "Failed to issue access token")
            })?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_manager.access_token_expiry_seconds(),
            user: user.into(),
        })
    }

    /// 現在のユーザー情報
    pub async fn me(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| AppError::Unauthorized("User no longer exists".to_string()))?;
        Ok(user.into())
    }

    /// 起動時の管理者アカウントを保証する
    pub async fn ensure_initial_admin(&self, admin: &InitialAdmin) -> AppResult<()> {
        match self.user_repo.find_by_email(&admin.email).await? {
            Some(user) if user.role == UserRole::Admin && user.is_active => {
                info!(user_id = %user.id, "Initial admin already present");
            }
            Some(user) => {
                let user = self.user_repo.promote_to_admin(user).await?;
                info!(user_id = %user.id, "Existing user promoted to initial admin");
            }
            None => {
                let password_hash = self.hash(&admin.password)?;
                let user = self
                    .user_repo
                    .create(NewUser {
                        email: admin.email.clone(),
                        username: admin.username.clone(),
                        password_hash,
                        full_name: None,
                        role: UserRole::Admin,
                    })
                    .await?;
                info!(user_id = %user.id, email = %user.email, "Initial admin created");
            }
        }
        Ok(())
    }

    fn hash(&self, password: &str) -> AppResult<String> {
        self.password_manager
            .hash_password(password)
            .map_err(|e| match e {
                PasswordError::WeakPassword(message) => {
                    AppError::ValidationError(format!("password: {}", message))
                }
                other => internal_server_error(
                    other,
                    "auth_service::hash",
                    "Failed to process password",
                ),
            })
    }
}
