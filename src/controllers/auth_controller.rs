//! Controller de autenticación por OTP

use validator::Validate;

use crate::dto::auth_dto::{AuthTokenResponse, RequestOtpRequest, VerifyOtpRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    state: AppState,
}

impl AuthController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn request_otp(
        &self,
        request: RequestOtpRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        self.state.otp.request_otp(&request.phone).await?;

        Ok(ApiResponse {
            success: true,
            message: Some("Verification code sent".to_string()),
            data: None,
        })
    }

    pub async fn verify_otp(
        &self,
        request: VerifyOtpRequest,
    ) -> Result<ApiResponse<AuthTokenResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let token = self.state.otp.verify_otp(&request.phone, &request.code).await?;

        Ok(ApiResponse::success(AuthTokenResponse {
            token,
            phone: request.phone,
        }))
    }
}
