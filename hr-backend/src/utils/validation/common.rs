// src/utils/validation/common.rs

//! 共通バリデーション定数と関数
//!
//! DTO間で重複するバリデーションルールをまとめて管理します。

use crate::error::AppError;
use crate::utils::error_helper::validation_error;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// ユーザー名の制約
pub mod username {
    pub const MIN_LENGTH: u64 = 3;
    pub const MAX_LENGTH: u64 = 50;
}

/// パスワードの制約
pub mod password {
    pub const MIN_LENGTH: u64 = 8;
    pub const MAX_LENGTH: u64 = 128;
}

/// 従業員関連の制約
pub mod employee {
    pub const CODE_MAX_LENGTH: u64 = 20;
    pub const NAME_MAX_LENGTH: u64 = 50;
    pub const POSITION_MAX_LENGTH: u64 = 100;
    pub const EMPLOYMENT_TYPE_MAX_LENGTH: u64 = 50;
    pub const GENDER_MAX_LENGTH: u64 = 20;
    pub const PHONE_MAX_LENGTH: u64 = 20;
}

/// 部署関連の制約
pub mod department {
    pub const NAME_MAX_LENGTH: u64 = 100;
}

/// 研修・書類関連の制約
pub mod record {
    pub const TITLE_MAX_LENGTH: u64 = 200;
    pub const FILE_PATH_MAX_LENGTH: u64 = 500;
    pub const FILE_NAME_MAX_LENGTH: u64 = 255;
    pub const SHORT_TEXT_MAX_LENGTH: u64 = 100;
}

/// 必須フィールドの制約
pub mod required {
    pub const MIN_LENGTH: u64 = 1;
}

pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid username regex"));

/// 社員番号。空白と制御文字以外は許可する
pub static EMPLOYEE_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s\p{C}]+$").expect("Invalid employee code regex"));

/// 電話番号。区切りに空白・ハイフン・ドット・スラッシュ・括弧、末尾に内線（x / ext / #）
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9(][0-9 ().\-/]*(?:\s*(?:[xX]|ext\.?|#)\s*[0-9]+)?$")
        .expect("Invalid phone regex")
});

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !USERNAME_REGEX.is_match(username) {
        let mut error = ValidationError::new("invalid_username_format");
        error.message =
            Some("Username may only contain letters, digits, hyphens and underscores".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_employee_code(code: &str) -> Result<(), ValidationError> {
    if !EMPLOYEE_CODE_REGEX.is_match(code) {
        let mut error = ValidationError::new("invalid_employee_code");
        error.message =
            Some("Employee ID must not contain whitespace or control characters".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone) {
        let mut error = ValidationError::new("invalid_phone");
        error.message = Some("Invalid phone number format".into());
        return Err(error);
    }
    Ok(())
}

/// 開始日 <= 終了日 を保証する
pub fn ensure_date_order(
    start: NaiveDate,
    end: NaiveDate,
    start_field: &str,
    end_field: &str,
) -> Result<(), AppError> {
    if start > end {
        return Err(validation_error(
            start_field,
            &format!("must be on or before {}", end_field),
        ));
    }
    Ok(())
}
