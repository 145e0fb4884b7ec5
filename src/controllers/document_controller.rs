use crate::dto::document_dto::{CreateDocumentRequest, DocumentResponse};
use crate::dto::ApiResponse;
use crate::repositories::document_repository::DocumentRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_optional_text, parse_optional_date, require_non_blank};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct DocumentController {
    repository: DocumentRepository,
    vehicles: VehicleRepository,
}

impl DocumentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DocumentRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDocumentRequest,
    ) -> Result<ApiResponse<DocumentResponse>, AppError> {
        request.validate()?;
        require_non_blank(&request.name, "name")?;
        require_non_blank(&request.file_url, "file_url")?;

        let expiry_date = parse_optional_date(request.expiry_date.as_deref())?;

        // Verificar que el vehículo existe
        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let doc = self
            .repository
            .create(
                request.vehicle_id,
                request.name.trim().to_string(),
                normalize_optional_text(request.doc_type),
                request.file_url.trim().to_string(),
                expiry_date,
                normalize_optional_text(request.notes),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            doc.into(),
            "Document created successfully".to_string(),
        ))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<DocumentResponse>, AppError> {
        let docs = self.repository.list_by_vehicle(vehicle_id).await?;
        Ok(docs.into_iter().map(DocumentResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
