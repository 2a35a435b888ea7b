// src/service/mod.rs
pub mod absence_service;
pub mod auth_service;
pub mod department_service;
pub mod document_service;
pub mod employee_service;
pub mod performance_service;
pub mod training_service;
