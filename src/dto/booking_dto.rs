//! DTOs del ciclo de vida de la reserva

use serde::{Deserialize, Serialize};

use crate::dto::money;
use crate::models::booking::{Booking, PaymentMethod, PickupOption, TripEvidence};

/// Evidencia fotográfica enviada al iniciar o terminar un viaje.
/// Las cuatro posiciones son obligatorias; la guarda del dominio rechaza
/// la transición si falta alguna.
#[derive(Debug, Deserialize)]
pub struct TripEvidenceRequest {
    pub front: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub back: Option<String>,
}

impl From<TripEvidenceRequest> for TripEvidence {
    fn from(request: TripEvidenceRequest) -> Self {
        Self {
            front: request.front,
            left: request.left,
            right: request.right,
            back: request.back,
        }
    }
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub vehicle_id: String,
    pub package_id: String,
    pub starts_at: String,
    pub ends_at: String,
    pub pickup_option: PickupOption,
    pub payment_method: PaymentMethod,
    pub coupon_code: Option<String>,
    pub total_amount: String,
    pub status: String,
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            vehicle_id: booking.vehicle_id.to_string(),
            package_id: booking.package_id.to_string(),
            starts_at: booking.window.starts_at.to_rfc3339(),
            ends_at: booking.window.ends_at.to_rfc3339(),
            pickup_option: booking.pickup_option,
            payment_method: booking.payment_method,
            coupon_code: booking.coupon_code,
            total_amount: money(booking.total_amount),
            status: booking.status.as_str().to_string(),
            created_at: booking.created_at.to_rfc3339(),
        }
    }
}
