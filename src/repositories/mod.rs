//! Repositorios de acceso a datos
//!
//! Cada repositorio encapsula el SQL de su tabla y expone operaciones tipadas.

pub mod document_repository;
pub mod fuel_log_repository;
pub mod reminder_repository;
pub mod service_record_repository;
pub mod vehicle_repository;
