use crate::dto::fuel_dto::{CreateFuelLogRequest, FuelLogResponse};
use crate::dto::ApiResponse;
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_optional_text, parse_required_date};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct FuelLogController {
    repository: FuelLogRepository,
    vehicles: VehicleRepository,
}

impl FuelLogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelLogRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    fn to_decimal(value: f64, field: &str) -> Result<Decimal, AppError> {
        Decimal::from_f64_retain(value)
            .ok_or_else(|| AppError::ValidationError(format!("Invalid {} value", field)))
    }

    pub async fn create(
        &self,
        request: CreateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLogResponse>, AppError> {
        request.validate()?;
        let date = parse_required_date(&request.date)?;
        let liters = Self::to_decimal(request.liters, "liters")?;
        let price_per_liter = Self::to_decimal(request.price_per_liter, "price_per_liter")?;
        let total_cost = Self::to_decimal(request.total_cost, "total_cost")?;

        // Verificar que el vehículo existe
        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let log = self
            .repository
            .create(
                request.vehicle_id,
                date,
                request.odometer,
                liters,
                price_per_liter,
                total_cost,
                request.full_tank,
                normalize_optional_text(request.notes),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Fuel log created successfully".to_string(),
        ))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<FuelLogResponse>, AppError> {
        let logs = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(logs.into_iter().map(FuelLogResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: CreateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLogResponse>, AppError> {
        request.validate()?;
        let date = parse_required_date(&request.date)?;
        let liters = Self::to_decimal(request.liters, "liters")?;
        let price_per_liter = Self::to_decimal(request.price_per_liter, "price_per_liter")?;
        let total_cost = Self::to_decimal(request.total_cost, "total_cost")?;

        let log = self
            .repository
            .update(
                id,
                date,
                request.odometer,
                liters,
                price_per_liter,
                total_cost,
                request.full_tank,
                normalize_optional_text(request.notes),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Fuel log updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
