//! Middleware de autenticación
//!
//! Valida el token de sesión emitido tras verificar el OTP y deja el
//! cliente autenticado disponible como extensión del request.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{validate_token, JwtConfig};

/// Cliente autenticado por OTP, extraído del token de sesión
#[derive(Debug, Clone)]
pub struct AuthenticatedCustomer {
    pub phone: String,
}

/// Middleware de autenticación por bearer token
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Expected a bearer token".to_string()))?;

    let claims = validate_token(token, &JwtConfig::from(&state.config))?;

    request.extensions_mut().insert(AuthenticatedCustomer {
        phone: claims.sub,
    });

    Ok(next.run(request).await)
}
