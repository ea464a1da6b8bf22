//! DTOs de la API
//!
//! Requests y responses de la capa HTTP, separados de los modelos del
//! dominio. El redondeo a 2 decimales de los montos ocurre acá, al
//! serializar para presentación, nunca antes.

pub mod auth_dto;
pub mod booking_dto;
pub mod catalog_dto;
pub mod checkout_dto;

use rust_decimal::Decimal;
use serde::Serialize;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Formatear un monto para presentación: 2 decimales, como string
pub fn money(amount: Decimal) -> String {
    amount.round_dp(2).to_string()
}
