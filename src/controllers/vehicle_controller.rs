use crate::dto::analytics_dto::VehicleStatsResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::dto::ApiResponse;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_optional_text, require_non_blank};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        require_non_blank(&request.name, "name")?;

        let vehicle = self
            .repository
            .create(
                request.name.trim().to_string(),
                normalize_optional_text(request.make),
                normalize_optional_text(request.model),
                request.year,
                normalize_optional_text(request.vehicle_type),
                normalize_optional_text(request.vin),
                normalize_optional_text(request.license_plate),
                normalize_optional_text(request.image_url),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        require_non_blank(&request.name, "name")?;

        let vehicle = self
            .repository
            .update(
                id,
                request.name.trim().to_string(),
                normalize_optional_text(request.make),
                normalize_optional_text(request.model),
                request.year,
                normalize_optional_text(request.vehicle_type),
                normalize_optional_text(request.vin),
                normalize_optional_text(request.license_plate),
                normalize_optional_text(request.image_url),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    pub async fn stats(&self, id: Uuid) -> Result<VehicleStatsResponse, AppError> {
        // Verificar que el vehículo existe antes de agregar
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let stats = self.repository.stats(id).await?;

        Ok(VehicleStatsResponse {
            total_cost: stats.total_fuel_cost + stats.total_service_cost,
            total_fuel_cost: stats.total_fuel_cost,
            total_service_cost: stats.total_service_cost,
            total_liters: stats.total_liters,
            total_services: stats.total_services,
            total_fuel_logs: stats.total_fuel_logs,
        })
    }
}
