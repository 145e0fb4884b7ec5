use crate::models::reminder::Reminder;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ReminderRepository {
    pool: PgPool,
}

impl ReminderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        title: String,
        due_date: Option<NaiveDate>,
        due_odometer: Option<i32>,
        is_recurring: bool,
        interval_km: Option<i32>,
        interval_months: Option<i32>,
        notes: Option<String>,
    ) -> Result<Reminder, AppError> {
        let reminder = sqlx::query_as::<_, Reminder>(
            r#"
            INSERT INTO reminders (id, vehicle_id, title, due_date, due_odometer, is_recurring, interval_km, interval_months, notes, is_completed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, FALSE, $10)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(title)
        .bind(due_date)
        .bind(due_odometer)
        .bind(is_recurring)
        .bind(interval_km)
        .bind(interval_months)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating reminder: {}", e)))?;

        Ok(reminder)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Reminder>, AppError> {
        let reminders = sqlx::query_as::<_, Reminder>(
            "SELECT * FROM reminders WHERE vehicle_id = $1 ORDER BY created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing reminders: {}", e)))?;

        Ok(reminders)
    }

    /// Recordatorios pendientes de un vehículo. El barrido solo evalúa estos;
    /// un recordatorio completado jamás se evalúa.
    pub async fn list_active_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Reminder>, AppError> {
        let reminders = sqlx::query_as::<_, Reminder>(
            "SELECT * FROM reminders WHERE vehicle_id = $1 AND is_completed = FALSE ORDER BY created_at",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing active reminders: {}", e)))?;

        Ok(reminders)
    }

    pub async fn complete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE reminders SET is_completed = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error completing reminder: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reminder not found".to_string()));
        }

        Ok(())
    }
}
