// src/domain/performance_rating.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 5段階の評価
///
/// JSON では 1..=5 の整数として扱う。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(try_from = "i32", into = "i32")]
pub enum PerformanceRating {
    #[sea_orm(num_value = 1)]
    Poor,
    #[sea_orm(num_value = 2)]
    BelowAverage,
    #[sea_orm(num_value = 3)]
    Average,
    #[sea_orm(num_value = 4)]
    Good,
    #[sea_orm(num_value = 5)]
    Excellent,
}

impl PerformanceRating {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "1 - Poor",
            Self::BelowAverage => "2 - Below Average",
            Self::Average => "3 - Average",
            Self::Good => "4 - Good",
            Self::Excellent => "5 - Excellent",
        }
    }
}

impl TryFrom<i32> for PerformanceRating {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Poor),
            2 => Ok(Self::BelowAverage),
            3 => Ok(Self::Average),
            4 => Ok(Self::Good),
            5 => Ok(Self::Excellent),
            _ => Err(format!("Rating must be between 1 and 5, got {}", value)),
        }
    }
}

impl From<PerformanceRating> for i32 {
    fn from(rating: PerformanceRating) -> Self {
        match rating {
            PerformanceRating::Poor => 1,
            PerformanceRating::BelowAverage => 2,
            PerformanceRating::Average => 3,
            PerformanceRating::Good => 4,
            PerformanceRating::Excellent => 5,
        }
    }
}
