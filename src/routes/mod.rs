//! Rutas de la API
//!
//! Cada recurso define sus rutas en su propio módulo; aquí se ensamblan
//! bajo /api/v1. Las rutas comparten el prefijo /vehicles/:id para los
//! listados por vehículo, igual que la API original del frontend.

pub mod document_routes;
pub mod fuel_routes;
pub mod reminder_routes;
pub mod service_routes;
pub mod vehicle_routes;

use axum::{extract::State, routing::get, Json, Router};

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(vehicle_routes::create_vehicle_router())
        .merge(service_routes::create_service_router())
        .merge(fuel_routes::create_fuel_router())
        .merge(reminder_routes::create_reminder_router())
        .merge(document_routes::create_document_router())
        .route("/config", get(get_app_config))
}

/// Configuración que consume el frontend (moneda de la app)
async fn get_app_config(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "currency": state.config.app_currency,
    }))
}
