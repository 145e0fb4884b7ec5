//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea exactamente
//! a la tabla vehicles del schema PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub vehicle_type: Option<String>,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
