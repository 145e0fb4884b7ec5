use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fuel_log::FuelLog;

// Request para crear o actualizar un repostaje
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    pub vehicle_id: Uuid,
    /// Fecha en formato YYYY-MM-DD
    pub date: String,
    #[validate(range(min = 0))]
    pub odometer: i32,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub full_tank: bool,
    pub notes: Option<String>,
}

// Response de repostaje
#[derive(Debug, Serialize)]
pub struct FuelLogResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub odometer: i32,
    pub liters: Decimal,
    pub price_per_liter: Decimal,
    pub total_cost: Decimal,
    pub full_tank: bool,
    pub notes: Option<String>,
}

impl From<FuelLog> for FuelLogResponse {
    fn from(log: FuelLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            date: log.date,
            odometer: log.odometer,
            liters: log.liters,
            price_per_liter: log.price_per_liter,
            total_cost: log.total_cost,
            full_tank: log.full_tank,
            notes: log.notes,
        }
    }
}
