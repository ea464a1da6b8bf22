//! Controller del ciclo de vida de la reserva

use uuid::Uuid;

use crate::dto::booking_dto::{BookingResponse, TripEvidenceRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct BookingController {
    state: AppState,
}

impl BookingController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn get(&self, booking_id: Uuid) -> Result<BookingResponse, AppError> {
        let booking = self.state.trips.get_booking(booking_id).await?;
        Ok(BookingResponse::from(booking))
    }

    pub async fn start_trip(
        &self,
        booking_id: Uuid,
        request: TripEvidenceRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.state.trips.start_trip(booking_id, request.into()).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Trip started".to_string(),
        ))
    }

    pub async fn end_trip(
        &self,
        booking_id: Uuid,
        request: TripEvidenceRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.state.trips.end_trip(booking_id, request.into()).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Trip ended".to_string(),
        ))
    }

    pub async fn cancel(&self, booking_id: Uuid) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.state.trips.cancel(booking_id).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Booking cancelled".to_string(),
        ))
    }

    pub async fn finalize(
        &self,
        booking_id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.state.trips.finalize(booking_id).await?;
        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Booking completed".to_string(),
        ))
    }
}
