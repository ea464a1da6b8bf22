//! Cliente del servicio de bookings
//!
//! El servicio remoto de bookings es la fuente de verdad de las reservas:
//! acá se crean, se verifica el pago y se reportan las transiciones de
//! viaje. Las respuestas llegan en un sobre tipado success/message/data
//! en lugar de JSON suelto.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::{
    Booking, DeliveryAddress, PaymentMethod, PickupOption, TripEvidence,
};
use crate::models::package::RentalWindow;
use crate::utils::errors::AppError;

/// Datos para crear una reserva PENDING_PAYMENT en el servicio remoto
#[derive(Debug, Clone, Serialize)]
pub struct NewBookingRecord {
    pub draft_id: Uuid,
    pub customer_phone: String,
    pub vehicle_id: Uuid,
    pub package_id: Uuid,
    pub window: RentalWindow,
    pub pickup_option: PickupOption,
    pub delivery_address: Option<DeliveryAddress>,
    pub payment_method: PaymentMethod,
    pub coupon_code: Option<String>,
    /// Total recalculado en el momento del submit, en unidades mayores
    pub total_amount: Decimal,
    /// El mismo total en unidades menores (paise), para el gateway
    pub amount_minor: i64,
}

/// Sesión devuelta por el servicio al crear la reserva
#[derive(Debug, Clone, Deserialize)]
pub struct BookingSession {
    pub booking_id: Uuid,
    pub payment_session_id: String,
    /// Importe en unidades menores (paise), como lo exige el gateway
    pub amount_minor: i64,
    pub currency: String,
}

/// Comprobante que entrega el gateway al completar el pago
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentProof {
    pub payment_id: String,
    pub signature: String,
}

/// Sobre genérico de las respuestas del servicio de bookings
#[derive(Debug, Deserialize)]
struct BookingEnvelope<T> {
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

#[async_trait]
pub trait BookingClient: Send + Sync {
    async fn create_booking(&self, record: &NewBookingRecord) -> Result<BookingSession, AppError>;
    async fn verify_payment(&self, booking_id: Uuid, proof: &PaymentProof) -> Result<(), AppError>;
    async fn cancel_booking(&self, booking_id: Uuid) -> Result<(), AppError>;
    async fn start_trip(&self, booking_id: Uuid, evidence: &TripEvidence) -> Result<(), AppError>;
    async fn end_trip(&self, booking_id: Uuid, evidence: &TripEvidence) -> Result<(), AppError>;
    async fn finalize_booking(&self, booking_id: Uuid) -> Result<(), AppError>;
    async fn get_booking(&self, booking_id: Uuid) -> Result<Booking, AppError>;
}

/// Implementación HTTP contra el servicio de bookings
pub struct HttpBookingClient {
    base_url: String,
    client: Client,
}

impl HttpBookingClient {
    pub fn new(base_url: String, client: Client) -> Self {
        Self { base_url, client }
    }

    async fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Booking service request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        log::debug!("📄 Booking service {} -> {}: {}", path, status, text);

        if !status.is_success() {
            return Err(AppError::BookingFailed(format!(
                "Booking service error {}: {}",
                status, text
            )));
        }

        let envelope: BookingEnvelope<T> = serde_json::from_str(&text).map_err(|e| {
            AppError::ExternalApi(format!("Error parsing booking service response: {}", e))
        })?;

        if !envelope.success {
            return Err(AppError::BookingFailed(
                envelope
                    .message
                    .unwrap_or_else(|| "Booking service reported failure".to_string()),
            ));
        }

        envelope.data.ok_or_else(|| {
            AppError::ExternalApi("Booking service response missing data".to_string())
        })
    }
}

#[async_trait]
impl BookingClient for HttpBookingClient {
    async fn create_booking(&self, record: &NewBookingRecord) -> Result<BookingSession, AppError> {
        log::info!("📝 Creando reserva pendiente para el draft {}", record.draft_id);
        self.post_json("/bookings", record).await
    }

    async fn verify_payment(&self, booking_id: Uuid, proof: &PaymentProof) -> Result<(), AppError> {
        log::info!("🔐 Verificando pago de la reserva {}", booking_id);
        let _: serde_json::Value = self
            .post_json(&format!("/bookings/{}/verify-payment", booking_id), proof)
            .await?;
        Ok(())
    }

    async fn cancel_booking(&self, booking_id: Uuid) -> Result<(), AppError> {
        log::info!("🚫 Cancelando reserva {}", booking_id);
        let _: serde_json::Value = self
            .post_json(
                &format!("/bookings/{}/cancel", booking_id),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    async fn start_trip(&self, booking_id: Uuid, evidence: &TripEvidence) -> Result<(), AppError> {
        log::info!("🏁 Reportando inicio de viaje de la reserva {}", booking_id);
        let _: serde_json::Value = self
            .post_json(&format!("/bookings/{}/start-trip", booking_id), evidence)
            .await?;
        Ok(())
    }

    async fn end_trip(&self, booking_id: Uuid, evidence: &TripEvidence) -> Result<(), AppError> {
        log::info!("🔚 Reportando fin de viaje de la reserva {}", booking_id);
        let _: serde_json::Value = self
            .post_json(&format!("/bookings/{}/end-trip", booking_id), evidence)
            .await?;
        Ok(())
    }

    async fn finalize_booking(&self, booking_id: Uuid) -> Result<(), AppError> {
        log::info!("🏷️ Reportando cierre de la reserva {}", booking_id);
        let _: serde_json::Value = self
            .post_json(
                &format!("/bookings/{}/finalize", booking_id),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    async fn get_booking(&self, booking_id: Uuid) -> Result<Booking, AppError> {
        let url = format!("{}/bookings/{}", self.base_url, booking_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Booking service request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "Booking '{}' not found",
                booking_id
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Booking service error {}: {}",
                status, body
            )));
        }

        response
            .json::<Booking>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error parsing booking response: {}", e)))
    }
}
