// src/types/mod.rs
pub mod query;
pub mod response;

pub use query::{RecordFilterQuery, SkipLimitQuery};
pub use response::ApiResponse;
