// src/extractors/mod.rs
pub mod json;
pub mod uuid;

pub use json::ValidatedJson;
pub use uuid::ValidatedUuid;
