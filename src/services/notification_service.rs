//! Servicio de notificaciones salientes
//!
//! Entrega best-effort de una notificación (title, message) a un endpoint
//! compatible con ntfy: POST a {base_url}/{topic} con el mensaje como body.
//! Un solo intento, sin reintentos; el fallo se reporta al caller.

use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct NotificationService {
    base_url: String,
    topic: String,
    enabled: bool,
    client: reqwest::Client,
}

impl NotificationService {
    pub fn new(base_url: String, topic: String, enabled: bool) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            topic,
            enabled,
            client,
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(
            config.notify_base_url.clone(),
            config.notify_topic.clone(),
            config.notify_enabled,
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enviar una notificación. Deshabilitado es un no-op que devuelve Ok.
    pub async fn send(&self, title: &str, message: &str) -> Result<(), AppError> {
        if !self.enabled {
            return Ok(());
        }

        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.topic)
        );

        let response = self
            .client
            .post(&url)
            .header("Title", title)
            .header("Tags", "car,warning")
            .body(message.to_string())
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Notification request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Notification failed with status: {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_is_noop_when_disabled() {
        let service = NotificationService::new(String::new(), String::new(), false);
        assert!(service.send("Reminder: Oil change", "Vehicle: Civic").await.is_ok());
    }

    #[tokio::test]
    async fn test_send_fails_against_unreachable_endpoint() {
        // Puerto reservado sin listener: el transporte debe fallar, no colgar
        let service = NotificationService::new(
            "http://127.0.0.1:1".to_string(),
            "vehicles".to_string(),
            true,
        );
        let result = service.send("Reminder: ITV", "Vehicle: Ibiza").await;
        assert!(result.is_err());
    }
}
