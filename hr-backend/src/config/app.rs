// src/config/app.rs
use crate::utils::jwt::JwtConfig;
use crate::utils::password::{Argon2Config, PasswordPolicy};
use std::env;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub body_limit: usize,
    pub request_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    pub argon2: Argon2Config,
    pub policy: PasswordPolicy,
}

/// 起動時に用意する管理者アカウント
#[derive(Clone)]
pub struct InitialAdmin {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for InitialAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitialAdmin")
            .field("email", &self.email)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// 登録時に employee 以外のロールを自己申請できるか
    pub allow_self_assigned_roles: bool,
    pub initial_admin: Option<InitialAdmin>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let jwt = JwtConfig::from_env().map_err(|e| e.to_string())?;
        jwt.validate().map_err(|e| e.to_string())?;

        let initial_admin = match (
            env::var("INITIAL_ADMIN_EMAIL"),
            env::var("INITIAL_ADMIN_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) => Some(InitialAdmin {
                email,
                username: env::var("INITIAL_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                password,
            }),
            _ => None,
        };

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .map_err(|_| "Invalid DB_MAX_CONNECTIONS value")?,
                min_connections: 1,
            },
            jwt,
            password: PasswordConfig {
                argon2: Argon2Config::from_env(),
                policy: PasswordPolicy::from_env(),
            },
            auth: AuthConfig {
                allow_self_assigned_roles: env::var("AUTH_ALLOW_SELF_ASSIGNED_ROLES")
                    .map(|v| parse_bool(&v))
                    .unwrap_or(false),
                initial_admin,
            },
            server: ServerConfig {
                body_limit: 2 * 1024 * 1024, // 2MB
                request_timeout_secs: 30,
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// テスト用の設定を作成
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                min_connections: 1,
            },
            jwt: JwtConfig {
                secret_key: "test-secret-key-that-is-at-least-32-characters-long".to_string(),
                ..JwtConfig::default()
            },
            password: PasswordConfig {
                argon2: Argon2Config::fast(),
                policy: PasswordPolicy::default(),
            },
            auth: AuthConfig {
                allow_self_assigned_roles: true,
                initial_admin: None,
            },
            server: ServerConfig {
                body_limit: 2 * 1024 * 1024,
                request_timeout_secs: 30,
            },
        }
    }
}
