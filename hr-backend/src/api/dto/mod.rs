// src/api/dto/mod.rs
pub mod absence_dto;
pub mod auth_dto;
pub mod common;
pub mod department_dto;
pub mod document_dto;
pub mod employee_dto;
pub mod performance_dto;
pub mod training_dto;

pub use common::MessageResponse;
