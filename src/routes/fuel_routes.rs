use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::fuel_log_controller::FuelLogController;
use crate::dto::fuel_dto::{CreateFuelLogRequest, FuelLogResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/fuel", get(list_fuel_logs))
        .route("/fuel", post(create_fuel_log))
        .route("/fuel/:id", put(update_fuel_log).delete(delete_fuel_log))
}

async fn create_fuel_log(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FuelLogResponse>>), AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_fuel_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<FuelLogResponse>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn update_fuel_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLogResponse>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_fuel_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Fuel log deleted successfully"
    })))
}
