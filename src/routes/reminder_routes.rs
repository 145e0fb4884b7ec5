use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reminder_controller::ReminderController;
use crate::dto::reminder_dto::{CreateReminderRequest, ReminderResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reminder_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles/:id/reminders", get(list_reminders))
        .route("/reminders", post(create_reminder))
        .route("/reminders/:id/complete", put(complete_reminder))
}

async fn create_reminder(
    State(state): State<AppState>,
    Json(request): Json<CreateReminderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReminderResponse>>), AppError> {
    let controller = ReminderController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_reminders(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ReminderResponse>>, AppError> {
    let controller = ReminderController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn complete_reminder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ReminderController::new(state.pool.clone());
    controller.complete(id).await?;
    Ok(Json(serde_json::json!({
        "message": "Reminder completed"
    })))
}
