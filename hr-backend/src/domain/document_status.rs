// src/domain/document_status.rs

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 書類の種類
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[sea_orm(string_value = "contract")]
    Contract,
    #[sea_orm(string_value = "id_document")]
    IdDocument,
    #[sea_orm(string_value = "certificate")]
    Certificate,
    #[sea_orm(string_value = "performance_review")]
    PerformanceReview,
    #[sea_orm(string_value = "training_certificate")]
    TrainingCertificate,
    #[sea_orm(string_value = "policy_acknowledgment")]
    PolicyAcknowledgment,
    #[sea_orm(string_value = "other")]
    Other,
}

/// 書類の状態
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expired")]
    Expired,
    #[sea_orm(string_value = "archived")]
    Archived,
    #[sea_orm(string_value = "pending_approval")]
    PendingApproval,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Archived => "archived",
            Self::PendingApproval => "pending_approval",
        }
    }

    /// 指定ステータスへ遷移可能かチェック
    pub fn can_transition_to(&self, next: DocumentStatus) -> bool {
        match self {
            Self::Active => matches!(
                next,
                Self::Expired | Self::Archived | Self::PendingApproval
            ),
            Self::PendingApproval => matches!(next, Self::Active | Self::Archived),
            Self::Expired => matches!(next, Self::Archived),
            Self::Archived => false,
        }
    }

    /// 有効期限を過ぎた有効な書類は期限切れとして扱う
    pub fn effective(self, expiry_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match (self, expiry_date) {
            (Self::Active, Some(expiry)) if expiry < today => Self::Expired,
            (status, _) => status,
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
