use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::document_dto::{CreateDocumentRequest, DocumentResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/documents", get(list_documents))
        .route("/documents", post(create_document))
        .route("/documents/:id", axum::routing::delete(delete_document))
}

async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponse>>), AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<DocumentResponse>>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DocumentController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Document deleted"
    })))
}
