// tests/integration/mod.rs

pub mod absences;
pub mod auth;
pub mod departments;
pub mod documents;
pub mod performance;
pub mod system;
pub mod training;
