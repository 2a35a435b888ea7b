// src/utils/permission.rs

use crate::domain::user_model::UserClaims;
use crate::domain::user_role::UserRole;
use crate::error::AppResult;
use crate::utils::error_helper::forbidden_error;
use std::fmt;

/// 権限チェックの対象リソース
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Employee,
    Department,
    Absence,
    Performance,
    Training,
    Document,
}

/// リソースに対する操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
    Approve,
    Acknowledge,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Employee => "employee",
            Self::Department => "department",
            Self::Absence => "absence",
            Self::Performance => "performance",
            Self::Training => "training",
            Self::Document => "document",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Approve => "approve",
            Self::Acknowledge => "acknowledge",
        };
        f.write_str(name)
    }
}

/// ロールと操作の対応表
pub struct AccessPolicy;

impl AccessPolicy {
    /// ロールがリソースに対する操作を許可されているか
    pub fn allows(role: UserRole, resource: Resource, action: Action) -> bool {
        use Action::*;
        use Resource::*;

        // 参照は全ロールに許可
        if action == Read {
            return true;
        }

        match role {
            UserRole::Admin | UserRole::HrManager => true,
            UserRole::Manager => match resource {
                Absence => matches!(action, Create | Update | Approve),
                Performance => matches!(action, Create | Update | Acknowledge),
                Training | Document => matches!(action, Create | Update),
                Employee | Department => false,
            },
            UserRole::Employee => match resource {
                Absence => matches!(action, Create | Update),
                Performance => action == Acknowledge,
                Document => action == Create,
                Employee | Department | Training => false,
            },
        }
    }

    /// 許可されていなければ Forbidden を返す
    pub fn ensure(user: &UserClaims, resource: Resource, action: Action) -> AppResult<()> {
        if Self::allows(user.role, resource, action) {
            return Ok(());
        }
        Err(forbidden_error(
            &format!("Role '{}' cannot {} {}", user.role, action, resource),
            "access_policy",
            &user.user_id.to_string(),
        ))
    }
}
