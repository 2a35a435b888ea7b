// src/domain/user_role.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ユーザーのロール
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "hr_manager")]
    HrManager,
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "employee")]
    Employee,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HrManager => "hr_manager",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    /// 組織全体の人事データを管理できるロールか
    pub fn is_hr_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::HrManager)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Employee
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "hr_manager" => Ok(Self::HrManager),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
