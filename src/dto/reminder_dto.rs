use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::reminder::Reminder;

// Request para crear un recordatorio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReminderRequest {
    pub vehicle_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Fecha de vencimiento en formato YYYY-MM-DD, vacío = sin fecha
    pub due_date: Option<String>,
    /// Kilometraje de vencimiento; cero o ausente = sin umbral de odómetro
    pub due_odometer: Option<i32>,
    #[serde(default)]
    pub is_recurring: bool,
    pub interval_km: Option<i32>,
    pub interval_months: Option<i32>,
    pub notes: Option<String>,
}

// Response de recordatorio
#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub due_odometer: Option<i32>,
    pub is_recurring: bool,
    pub interval_km: Option<i32>,
    pub interval_months: Option<i32>,
    pub notes: Option<String>,
    pub is_completed: bool,
}

impl From<Reminder> for ReminderResponse {
    fn from(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            vehicle_id: reminder.vehicle_id,
            title: reminder.title,
            due_date: reminder.due_date,
            due_odometer: reminder.due_odometer,
            is_recurring: reminder.is_recurring,
            interval_km: reminder.interval_km,
            interval_months: reminder.interval_months,
            notes: reminder.notes,
            is_completed: reminder.is_completed,
        }
    }
}
