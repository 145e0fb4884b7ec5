use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Estadísticas agregadas de un vehículo
#[derive(Debug, sqlx::FromRow)]
pub struct VehicleStats {
    pub total_fuel_cost: Decimal,
    pub total_service_cost: Decimal,
    pub total_liters: Decimal,
    pub total_services: i64,
    pub total_fuel_logs: i64,
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        vehicle_type: Option<String>,
        vin: Option<String>,
        license_plate: Option<String>,
        image_url: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, name, make, model, year, vehicle_type, vin, license_plate, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(vehicle_type)
        .bind(vin)
        .bind(license_plate)
        .bind(image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: String,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        vehicle_type: Option<String>,
        vin: Option<String>,
        license_plate: Option<String>,
        image_url: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, make = $3, model = $4, year = $5, vehicle_type = $6,
                vin = $7, license_plate = $8, image_url = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(vehicle_type)
        .bind(vin)
        .bind(license_plate)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle: {}", e)))?;

        vehicle.ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }

    /// Kilometraje actual del vehículo: máximo odómetro observado entre
    /// service_records y fuel_logs. Sin historial devuelve 0.
    pub async fn current_odometer(&self, vehicle_id: Uuid) -> Result<i32, AppError> {
        let max_odo = sqlx::query_scalar::<_, Option<i32>>(
            r#"
            SELECT GREATEST(
                (SELECT COALESCE(MAX(odometer), 0) FROM service_records WHERE vehicle_id = $1),
                (SELECT COALESCE(MAX(odometer), 0) FROM fuel_logs WHERE vehicle_id = $1)
            )
            "#,
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error resolving odometer: {}", e)))?;

        Ok(max_odo.unwrap_or(0))
    }

    pub async fn stats(&self, vehicle_id: Uuid) -> Result<VehicleStats, AppError> {
        let stats = sqlx::query_as::<_, VehicleStats>(
            r#"
            SELECT
                (SELECT COALESCE(SUM(total_cost), 0) FROM fuel_logs WHERE vehicle_id = $1) AS total_fuel_cost,
                (SELECT COALESCE(SUM(cost), 0) FROM service_records WHERE vehicle_id = $1) AS total_service_cost,
                (SELECT COALESCE(SUM(liters), 0) FROM fuel_logs WHERE vehicle_id = $1) AS total_liters,
                (SELECT COUNT(*) FROM service_records WHERE vehicle_id = $1) AS total_services,
                (SELECT COUNT(*) FROM fuel_logs WHERE vehicle_id = $1) AS total_fuel_logs
            "#
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error fetching vehicle stats: {}", e)))?;

        Ok(stats)
    }
}
