//! Modelo de ServiceRecord
//!
//! Registro de mantenimiento de un vehículo (cambio de aceite, frenos, etc.).
//! El odómetro registrado aquí alimenta la resolución del kilometraje actual.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// ServiceRecord - mapea a la tabla service_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub odometer: i32,
    pub cost: Decimal,
    pub notes: Option<String>,
    pub service_type: Option<String>,
    pub document_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
