//! Modelo de FuelLog
//!
//! Registro de repostaje. Junto con los service records, el odómetro de estos
//! registros determina el kilometraje actual del vehículo.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// FuelLog - mapea a la tabla fuel_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub odometer: i32,
    pub liters: Decimal,
    pub price_per_liter: Decimal,
    pub total_cost: Decimal,
    pub full_tank: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
