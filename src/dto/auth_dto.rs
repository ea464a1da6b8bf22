//! DTOs de autenticación por OTP

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para pedir un código OTP
#[derive(Debug, Deserialize, Validate)]
pub struct RequestOtpRequest {
    #[validate(length(min = 10, max = 15))]
    pub phone: String,
}

/// Request para verificar un código OTP
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 10, max = 15))]
    pub phone: String,

    #[validate(length(equal = 6))]
    pub code: String,
}

/// Response con el token de sesión emitido
#[derive(Debug, Serialize)]
pub struct AuthTokenResponse {
    pub token: String,
    pub phone: String,
}
