//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! compartidas entre controllers.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    // Códigos postales de 6 dígitos (formato PIN)
    static ref POSTAL_CODE_RE: Regex = Regex::new(r"^\d{6}$").unwrap();
    // Teléfonos de 10 dígitos, con prefijo de país opcional
    static ref PHONE_RE: Regex = Regex::new(r"^(\+\d{1,3})?\d{10}$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a datetime
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
            error
        })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar código postal de la dirección de entrega
pub fn is_valid_postal_code(value: &str) -> bool {
    POSTAL_CODE_RE.is_match(value.trim())
}

/// Validar número de teléfono para OTP
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}
