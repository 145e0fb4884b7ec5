use crate::dto::reminder_dto::{CreateReminderRequest, ReminderResponse};
use crate::dto::ApiResponse;
use crate::repositories::reminder_repository::ReminderRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_optional_text, parse_optional_date, require_non_blank};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ReminderController {
    repository: ReminderRepository,
    vehicles: VehicleRepository,
}

impl ReminderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReminderRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateReminderRequest,
    ) -> Result<ApiResponse<ReminderResponse>, AppError> {
        request.validate()?;
        require_non_blank(&request.title, "title")?;

        let due_date = parse_optional_date(request.due_date.as_deref())?;
        // Cero o negativo equivale a "sin umbral de odómetro"
        let due_odometer = request.due_odometer.filter(|v| *v > 0);
        let interval_km = request.interval_km.filter(|v| *v > 0);
        let interval_months = request.interval_months.filter(|v| *v > 0);

        // Verificar que el vehículo existe
        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let reminder = self
            .repository
            .create(
                request.vehicle_id,
                request.title.trim().to_string(),
                due_date,
                due_odometer,
                request.is_recurring,
                interval_km,
                interval_months,
                normalize_optional_text(request.notes),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            reminder.into(),
            "Reminder created successfully".to_string(),
        ))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<ReminderResponse>, AppError> {
        let reminders = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(reminders.into_iter().map(ReminderResponse::from).collect())
    }

    pub async fn complete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.complete(id).await
    }
}
