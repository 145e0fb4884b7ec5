mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use services::{NotificationService, ReminderScheduler};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Vehicle Maintenance - API");
    info!("============================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    info!("✅ Base de datos conectada");

    // Notificador y planificador del barrido de recordatorios
    let notifier = NotificationService::from_config(&config);
    if notifier.is_enabled() {
        info!("📣 Notificaciones habilitadas");
    } else {
        info!("🔕 Notificaciones deshabilitadas");
    }

    let scheduler = ReminderScheduler::start(pool.clone(), &config, notifier);
    info!(
        "⏰ Barrido de recordatorios cada {}s",
        config.reminder_check_interval_secs
    );

    // Crear router de la API
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehicles:");
    info!("   POST /api/v1/vehicles - Crear vehículo");
    info!("   GET  /api/v1/vehicles - Listar vehículos");
    info!("   GET  /api/v1/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/v1/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/v1/vehicles/:id - Eliminar vehículo");
    info!("   GET  /api/v1/vehicles/:id/stats - Estadísticas del vehículo");
    info!("🔧 Service records:");
    info!("   GET  /api/v1/vehicles/:id/services - Listar mantenimientos");
    info!("   POST /api/v1/services - Crear mantenimiento");
    info!("   PUT  /api/v1/services/:id - Actualizar mantenimiento");
    info!("   DELETE /api/v1/services/:id - Eliminar mantenimiento");
    info!("⛽ Fuel logs:");
    info!("   GET  /api/v1/vehicles/:id/fuel - Listar repostajes");
    info!("   POST /api/v1/fuel - Crear repostaje");
    info!("   PUT  /api/v1/fuel/:id - Actualizar repostaje");
    info!("   DELETE /api/v1/fuel/:id - Eliminar repostaje");
    info!("🔔 Reminders:");
    info!("   GET  /api/v1/vehicles/:id/reminders - Listar recordatorios");
    info!("   POST /api/v1/reminders - Crear recordatorio");
    info!("   PUT  /api/v1/reminders/:id/complete - Completar recordatorio");
    info!("📄 Documents:");
    info!("   GET  /api/v1/vehicles/:id/documents - Listar documentos");
    info!("   POST /api/v1/documents - Crear documento");
    info!("   DELETE /api/v1/documents/:id - Eliminar documento");
    info!("⚙️ Config:");
    info!("   GET  /api/v1/config - Configuración de la app");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    // Dejar que el barrido en curso termine su vehículo actual y parar
    scheduler.stop().await;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Vehicle Maintenance API is running"
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
