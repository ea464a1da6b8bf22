//! Rutas de autenticación por OTP

use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AuthTokenResponse, RequestOtpRequest, VerifyOtpRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/otp/request", post(request_otp))
        .route("/otp/verify", post(verify_otp))
}

async fn request_otp(
    State(state): State<AppState>,
    Json(request): Json<RequestOtpRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AuthController::new(state);
    let response = controller.request_otp(request).await?;
    Ok(Json(response))
}

async fn verify_otp(
    State(state): State<AppState>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<Json<ApiResponse<AuthTokenResponse>>, AppError> {
    let controller = AuthController::new(state);
    let response = controller.verify_otp(request).await?;
    Ok(Json(response))
}
