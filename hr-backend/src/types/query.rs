// src/types/query.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;

/// オフセット方式のページネーション（skip / limit）
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct SkipLimitQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}

impl SkipLimitQuery {
    /// (offset, limit) を返す。limit は 1..=MAX_LIMIT に丸める
    pub fn resolve(&self) -> (u64, u64) {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        (skip, limit)
    }
}

/// 従業員単位で記録を絞り込むクエリ
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct RecordFilterQuery {
    pub employee_id: Option<Uuid>,
}
