//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    /// Intervalo del barrido de recordatorios en segundos
    pub reminder_check_interval_secs: u64,
    /// Configuración del notificador (estilo ntfy: POST a {base_url}/{topic})
    pub notify_enabled: bool,
    pub notify_base_url: String,
    pub notify_topic: String,
    /// Moneda que muestra el frontend
    pub app_currency: String,
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno.
    /// Todas las variables tienen defaults razonables excepto DATABASE_URL,
    /// que se resuelve en el módulo de base de datos.
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            reminder_check_interval_secs: env::var("REMINDER_CHECK_INTERVAL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            notify_enabled: env::var("NOTIFY_ENABLED")
                .map(|v| v == "true")
                .unwrap_or(false),
            notify_base_url: env::var("NOTIFY_BASE_URL").unwrap_or_default(),
            notify_topic: env::var("NOTIFY_TOPIC").unwrap_or_default(),
            app_currency: env::var("APP_CURRENCY").unwrap_or_else(|_| "₹".to_string()),
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_default_is_one_hour() {
        // Sin REMINDER_CHECK_INTERVAL_SECS en el entorno el default es una hora
        if env::var("REMINDER_CHECK_INTERVAL_SECS").is_err() {
            let config = EnvironmentConfig::from_env();
            assert_eq!(config.reminder_check_interval_secs, 3600);
        }
    }

    #[test]
    fn test_notify_disabled_by_default() {
        if env::var("NOTIFY_ENABLED").is_err() {
            let config = EnvironmentConfig::from_env();
            assert!(!config.notify_enabled);
        }
    }
}
