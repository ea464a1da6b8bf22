//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Coupon '{0}' not found")]
    CouponNotFound(String),

    #[error("Coupon '{0}' has expired")]
    CouponExpired(String),

    #[error("No one-day package available for this category")]
    MissingOneDayPackage,

    #[error("Trip evidence incomplete: missing {missing:?}")]
    IncompleteEvidence { missing: Vec<String> },

    #[error("Invalid transition '{event}' from state '{from}'")]
    InvalidTransition { from: String, event: String },

    #[error("Booking failed: {0}")]
    BookingFailed(String),

    #[error("Payment was not completed")]
    PaymentAbandoned,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: reason,
                    details: Some(json!({ "field": field })),
                    code: Some("VALIDATION_ERROR".to_string()),
                },
            ),

            AppError::CouponNotFound(code) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Coupon Not Found".to_string(),
                    message: format!("Coupon '{}' does not exist", code),
                    details: None,
                    code: Some("COUPON_NOT_FOUND".to_string()),
                },
            ),

            AppError::CouponExpired(code) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Coupon Expired".to_string(),
                    message: format!("Coupon '{}' is no longer valid", code),
                    details: None,
                    code: Some("COUPON_EXPIRED".to_string()),
                },
            ),

            AppError::MissingOneDayPackage => {
                // Precondición de integridad del catálogo: el detalle se loguea,
                // al usuario solo le llega un mensaje genérico
                eprintln!("Catalog integrity violation: no active one-day package");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Pricing Unavailable".to_string(),
                        message: "Pricing is unavailable for this vehicle right now".to_string(),
                        details: None,
                        code: Some("PRICING_UNAVAILABLE".to_string()),
                    },
                )
            }

            AppError::IncompleteEvidence { missing } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Incomplete Evidence".to_string(),
                    message: "All four photos (front, left, right, back) are required".to_string(),
                    details: Some(json!({ "missing": missing })),
                    code: Some("INCOMPLETE_EVIDENCE".to_string()),
                },
            ),

            AppError::InvalidTransition { from, event } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Invalid Transition".to_string(),
                    message: format!("Cannot apply '{}' while booking is in state '{}'", event, from),
                    details: Some(json!({ "from": from, "event": event })),
                    code: Some("INVALID_TRANSITION".to_string()),
                },
            ),

            AppError::BookingFailed(msg) => {
                eprintln!("Booking failed: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Booking Failed".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BOOKING_FAILED".to_string()),
                    },
                )
            }

            AppError::PaymentAbandoned => (
                StatusCode::PAYMENT_REQUIRED,
                ErrorResponse {
                    error: "Payment Abandoned".to_string(),
                    message: "Payment was not completed. The booking remains pending; retry when ready"
                        .to_string(),
                    details: None,
                    code: Some("PAYMENT_ABANDONED".to_string()),
                },
            ),

            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: Some("UNAUTHORIZED".to_string()),
                },
            ),

            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                },
            ),

            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Conflict".to_string(),
                    message: msg,
                    details: None,
                    code: Some("CONFLICT".to_string()),
                },
            ),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: Some("BAD_REQUEST".to_string()),
                },
            ),

            AppError::ExternalApi(msg) => {
                eprintln!("External API error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "External API Error".to_string(),
                        message: "An error occurred while communicating with external service"
                            .to_string(),
                        details: Some(json!({ "external_api_error": msg })),
                        code: Some("EXTERNAL_API_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación con campo
pub fn validation_error(field: &str, reason: &str) -> AppError {
    AppError::Validation {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
