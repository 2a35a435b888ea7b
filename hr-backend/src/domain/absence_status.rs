// src/domain/absence_status.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 休暇の種類
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "snake_case")]
pub enum AbsenceType {
    #[sea_orm(string_value = "annual_leave")]
    AnnualLeave,
    #[sea_orm(string_value = "sick_leave")]
    SickLeave,
    #[sea_orm(string_value = "personal_leave")]
    PersonalLeave,
    #[sea_orm(string_value = "maternity_leave")]
    MaternityLeave,
    #[sea_orm(string_value = "paternity_leave")]
    PaternityLeave,
    #[sea_orm(string_value = "bereavement_leave")]
    BereavementLeave,
    #[sea_orm(string_value = "other")]
    Other,
}

/// 休暇申請の状態
///
/// `Pending` からのみ遷移でき、それ以外はすべて終端状態。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum AbsenceStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl AbsenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// 指定ステータスへ遷移可能かチェック
    pub fn can_transition_to(&self, next: AbsenceStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Pending, Self::Cancelled)
        )
    }
}

impl fmt::Display for AbsenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
