//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod document;
pub mod fuel_log;
pub mod reminder;
pub mod service_record;
pub mod vehicle;
