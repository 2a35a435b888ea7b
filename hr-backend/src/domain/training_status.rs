// src/domain/training_status.rs

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 研修の種類
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    #[sea_orm(string_value = "mandatory")]
    Mandatory,
    #[sea_orm(string_value = "optional")]
    Optional,
    #[sea_orm(string_value = "certification")]
    Certification,
    #[sea_orm(string_value = "skill_development")]
    SkillDevelopment,
}

/// 研修の進捗状態
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    #[sea_orm(string_value = "not_started")]
    NotStarted,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "expired")]
    Expired,
}

impl TrainingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Expired => "expired",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Expired)
    }

    /// 指定ステータスへ遷移可能かチェック
    pub fn can_transition_to(&self, next: TrainingStatus) -> bool {
        match self {
            Self::NotStarted => matches!(next, Self::InProgress | Self::Completed | Self::Expired),
            Self::InProgress => matches!(next, Self::Completed | Self::Expired),
            Self::Completed | Self::Expired => false,
        }
    }

    /// 期限を過ぎた未完了の研修は期限切れとして扱う（保存値は変更しない）
    pub fn effective(
        self,
        due_date: Option<NaiveDate>,
        expiry_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let overdue = [due_date, expiry_date]
            .into_iter()
            .flatten()
            .any(|date| date < today);

        if overdue && !self.is_terminal() {
            Self::Expired
        } else {
            self
        }
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
