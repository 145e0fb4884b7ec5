//! Validación de datos de entrada
//!
//! Helpers de validación compartidos por los controllers.

use chrono::NaiveDate;

use crate::utils::errors::AppError;

/// Parsear una fecha opcional en formato YYYY-MM-DD.
///
/// El frontend envía cadena vacía cuando el campo no está definido,
/// por eso `""` y `None` se tratan como ausencia de fecha.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::BadRequest(format!("Invalid date format '{}', use YYYY-MM-DD", raw))
            }),
    }
}

/// Parsear una fecha obligatoria en formato YYYY-MM-DD.
pub fn parse_required_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date format '{}', use YYYY-MM-DD", value)))
}

/// Normalizar un texto opcional: cadena vacía se convierte en None.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

/// Validar que un campo de texto requerido no esté en blanco.
pub fn require_non_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_date_empty_is_none() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(parse_optional_date(Some("   ")).unwrap(), None);
    }

    #[test]
    fn test_parse_optional_date_valid() {
        let parsed = parse_optional_date(Some("2024-01-05")).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 5));
    }

    #[test]
    fn test_parse_optional_date_invalid() {
        assert!(parse_optional_date(Some("05/01/2024")).is_err());
        assert!(parse_optional_date(Some("not-a-date")).is_err());
    }

    #[test]
    fn test_parse_required_date() {
        assert!(parse_required_date("2024-12-31").is_ok());
        assert!(parse_required_date("").is_err());
    }

    #[test]
    fn test_normalize_optional_text() {
        assert_eq!(normalize_optional_text(None), None);
        assert_eq!(normalize_optional_text(Some("".to_string())), None);
        assert_eq!(
            normalize_optional_text(Some("  oil change  ".to_string())),
            Some("oil change".to_string())
        );
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("Honda City", "name").is_ok());
        assert!(require_non_blank("   ", "name").is_err());
    }
}
