use crate::dto::service_dto::{CreateServiceRecordRequest, ServiceRecordResponse};
use crate::dto::ApiResponse;
use crate::repositories::service_record_repository::ServiceRecordRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_optional_text, parse_required_date};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ServiceRecordController {
    repository: ServiceRecordRepository,
    vehicles: VehicleRepository,
}

impl ServiceRecordController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceRecordRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateServiceRecordRequest,
    ) -> Result<ApiResponse<ServiceRecordResponse>, AppError> {
        request.validate()?;
        let date = parse_required_date(&request.date)?;
        let cost = Decimal::from_f64_retain(request.cost)
            .ok_or_else(|| AppError::ValidationError("Invalid cost value".to_string()))?;

        // Verificar que el vehículo existe
        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let record = self
            .repository
            .create(
                request.vehicle_id,
                date,
                request.odometer,
                cost,
                normalize_optional_text(request.notes),
                normalize_optional_text(request.service_type),
                normalize_optional_text(request.document_url),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            record.into(),
            "Service record created successfully".to_string(),
        ))
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<ServiceRecordResponse>, AppError> {
        let records = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(records
            .into_iter()
            .map(ServiceRecordResponse::from)
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: CreateServiceRecordRequest,
    ) -> Result<ApiResponse<ServiceRecordResponse>, AppError> {
        request.validate()?;
        let date = parse_required_date(&request.date)?;
        let cost = Decimal::from_f64_retain(request.cost)
            .ok_or_else(|| AppError::ValidationError("Invalid cost value".to_string()))?;

        let record = self
            .repository
            .update(
                id,
                date,
                request.odometer,
                cost,
                normalize_optional_text(request.notes),
                normalize_optional_text(request.service_type),
                normalize_optional_text(request.document_url),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            record.into(),
            "Service record updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
