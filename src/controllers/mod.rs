//! Controllers de la API
//!
//! Cada controller encapsula la lógica de negocio de un recurso:
//! validación, verificación de referencias y mapeo a DTOs.

pub mod document_controller;
pub mod fuel_log_controller;
pub mod reminder_controller;
pub mod service_record_controller;
pub mod vehicle_controller;
