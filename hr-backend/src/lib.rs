// src/lib.rs
pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod repository;
pub mod service;
pub mod types;
pub mod utils;

pub use types::ApiResponse;
