use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::service_record_controller::ServiceRecordController;
use crate::dto::service_dto::{CreateServiceRecordRequest, ServiceRecordResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/services", get(list_service_records))
        .route("/services", post(create_service_record))
        .route(
            "/services/:id",
            put(update_service_record).delete(delete_service_record),
        )
}

async fn create_service_record(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRecordRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceRecordResponse>>), AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_service_records(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ServiceRecordResponse>>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn update_service_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateServiceRecordRequest>,
) -> Result<Json<ApiResponse<ServiceRecordResponse>>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_service_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Service record deleted successfully"
    })))
}
