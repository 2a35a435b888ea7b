// src/api/dto/common.rs
use serde::{Deserialize, Serialize};

/// 処理結果のメッセージのみを返すレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
