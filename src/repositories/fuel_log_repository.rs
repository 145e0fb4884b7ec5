use crate::models::fuel_log::FuelLog;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct FuelLogRepository {
    pool: PgPool,
}

impl FuelLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        date: NaiveDate,
        odometer: i32,
        liters: Decimal,
        price_per_liter: Decimal,
        total_cost: Decimal,
        full_tank: bool,
        notes: Option<String>,
    ) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            INSERT INTO fuel_logs (id, vehicle_id, date, odometer, liters, price_per_liter, total_cost, full_tank, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(date)
        .bind(odometer)
        .bind(liters)
        .bind(price_per_liter)
        .bind(total_cost)
        .bind(full_tank)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating fuel log: {}", e)))?;

        Ok(log)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            "SELECT * FROM fuel_logs WHERE vehicle_id = $1 ORDER BY date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing fuel logs: {}", e)))?;

        Ok(logs)
    }

    pub async fn update(
        &self,
        id: Uuid,
        date: NaiveDate,
        odometer: i32,
        liters: Decimal,
        price_per_liter: Decimal,
        total_cost: Decimal,
        full_tank: bool,
        notes: Option<String>,
    ) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            UPDATE fuel_logs
            SET date = $2, odometer = $3, liters = $4, price_per_liter = $5,
                total_cost = $6, full_tank = $7, notes = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(odometer)
        .bind(liters)
        .bind(price_per_liter)
        .bind(total_cost)
        .bind(full_tank)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating fuel log: {}", e)))?;

        log.ok_or_else(|| AppError::NotFound("Fuel log not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fuel_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting fuel log: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fuel log not found".to_string()));
        }

        Ok(())
    }
}
