use crate::models::service_record::ServiceRecord;
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ServiceRecordRepository {
    pool: PgPool,
}

impl ServiceRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        date: NaiveDate,
        odometer: i32,
        cost: Decimal,
        notes: Option<String>,
        service_type: Option<String>,
        document_url: Option<String>,
    ) -> Result<ServiceRecord, AppError> {
        let record = sqlx::query_as::<_, ServiceRecord>(
            r#"
            INSERT INTO service_records (id, vehicle_id, date, odometer, cost, notes, service_type, document_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(date)
        .bind(odometer)
        .bind(cost)
        .bind(notes)
        .bind(service_type)
        .bind(document_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating service record: {}", e)))?;

        Ok(record)
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ServiceRecord>, AppError> {
        let records = sqlx::query_as::<_, ServiceRecord>(
            "SELECT * FROM service_records WHERE vehicle_id = $1 ORDER BY date DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing service records: {}", e)))?;

        Ok(records)
    }

    pub async fn update(
        &self,
        id: Uuid,
        date: NaiveDate,
        odometer: i32,
        cost: Decimal,
        notes: Option<String>,
        service_type: Option<String>,
        document_url: Option<String>,
    ) -> Result<ServiceRecord, AppError> {
        let record = sqlx::query_as::<_, ServiceRecord>(
            r#"
            UPDATE service_records
            SET date = $2, odometer = $3, cost = $4, notes = $5, service_type = $6, document_url = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date)
        .bind(odometer)
        .bind(cost)
        .bind(notes)
        .bind(service_type)
        .bind(document_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating service record: {}", e)))?;

        record.ok_or_else(|| AppError::NotFound("Service record not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM service_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting service record: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service record not found".to_string()));
        }

        Ok(())
    }
}
