// src/utils/mod.rs
pub mod error_helper;
pub mod jwt;
pub mod password;
pub mod permission;
pub mod transaction;
pub mod validation;
