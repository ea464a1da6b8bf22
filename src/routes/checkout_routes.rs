//! Rutas del flujo de checkout

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::checkout_controller::CheckoutController;
use crate::dto::checkout_dto::{
    ApplyCouponRequest, ConfirmRequest, CreateDraftRequest, DraftResponse, OrderResponse,
    QuoteResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth_middleware::AuthenticatedCustomer;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_checkout_router() -> Router<AppState> {
    Router::new()
        .route("/draft", post(create_draft))
        .route("/draft/:id/quote", get(quote))
        .route("/draft/:id/coupon", post(apply_coupon))
        .route("/draft/:id/coupon", delete(remove_coupon))
        .route("/draft/:id/confirm", post(confirm))
}

async fn create_draft(
    State(state): State<AppState>,
    Extension(customer): Extension<AuthenticatedCustomer>,
    Json(request): Json<CreateDraftRequest>,
) -> Result<Json<ApiResponse<DraftResponse>>, AppError> {
    let controller = CheckoutController::new(state);
    let response = controller.create_draft(customer.phone, request).await?;
    Ok(Json(response))
}

async fn quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuoteResponse>, AppError> {
    let controller = CheckoutController::new(state);
    let response = controller.quote(id).await?;
    Ok(Json(response))
}

async fn apply_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApplyCouponRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let controller = CheckoutController::new(state);
    let response = controller.apply_coupon(id, request).await?;
    Ok(Json(response))
}

async fn remove_coupon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuoteResponse>, AppError> {
    let controller = CheckoutController::new(state);
    let response = controller.remove_coupon(id).await?;
    Ok(Json(response))
}

async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ConfirmRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let controller = CheckoutController::new(state);
    let response = controller.confirm(id, request).await?;
    Ok(Json(response))
}
