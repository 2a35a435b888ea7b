// src/domain/mod.rs
pub mod absence_model;
pub mod absence_status;
pub mod department_model;
pub mod document_model;
pub mod document_status;
pub mod employee_model;
pub mod performance_model;
pub mod performance_rating;
pub mod training_model;
pub mod training_status;
pub mod user_model;
pub mod user_role;
