//! Modelo de Reminder
//!
//! Un recordatorio pertenece a un vehículo y puede vencer por fecha,
//! por odómetro, o por ambos. Un recordatorio sin fecha ni odómetro es
//! inerte: nunca dispara, y no es un error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reminder - mapea a la tabla reminders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    /// Kilometraje de vencimiento en km
    pub due_odometer: Option<i32>,
    pub is_recurring: bool,
    pub interval_km: Option<i32>,
    pub interval_months: Option<i32>,
    pub notes: Option<String>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}
