//! Rutas del ciclo de vida de la reserva

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingResponse, TripEvidenceRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_booking))
        .route("/:id/cancel", post(cancel_booking))
        .route("/:id/start-trip", post(start_trip))
        .route("/:id/end-trip", post(end_trip))
        .route("/:id/finalize", post(finalize_booking))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.cancel(id).await?;
    Ok(Json(response))
}

async fn start_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TripEvidenceRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.start_trip(id, request).await?;
    Ok(Json(response))
}

async fn end_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TripEvidenceRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.end_trip(id, request).await?;
    Ok(Json(response))
}

async fn finalize_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state);
    let response = controller.finalize(id).await?;
    Ok(Json(response))
}
