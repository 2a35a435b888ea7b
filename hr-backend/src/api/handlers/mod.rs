// src/api/handlers/mod.rs
pub mod absence_handler;
pub mod auth_handler;
pub mod department_handler;
pub mod document_handler;
pub mod employee_handler;
pub mod performance_handler;
pub mod system_handler;
pub mod training_handler;
