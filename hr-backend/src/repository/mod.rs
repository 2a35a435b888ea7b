// src/repository/mod.rs
pub mod absence_repository;
pub mod department_repository;
pub mod document_repository;
pub mod employee_repository;
pub mod performance_repository;
pub mod training_repository;
pub mod user_repository;
