//! Modelo de Booking y su máquina de estados
//!
//! Este módulo contiene el ciclo de vida de una reserva:
//! PENDING_PAYMENT → BOOKING_ACCEPTED → START_TRIP → END_TRIP → COMPLETED,
//! con CANCELLED alcanzable solo antes de START_TRIP. Las transiciones de
//! inicio y fin de viaje exigen evidencia fotográfica completa.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::package::RentalWindow;
use crate::utils::errors::AppError;

/// Modalidad de entrega del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickupOption {
    SelfPickup,
    DeliveryAtLocation,
}

/// Dirección de entrega, obligatoria cuando se elige DELIVERY_AT_LOCATION
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub address: String,
    pub postal_code: String,
    pub landmark: Option<String>,
}

/// Método de pago de la reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Online,
    CashOnCenter,
}

/// Evidencia fotográfica de inicio o fin de viaje.
/// Las cuatro posiciones son obligatorias antes de enviar la transición.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripEvidence {
    pub front: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub back: Option<String>,
}

impl TripEvidence {
    /// Posiciones que faltan por fotografiar
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.front.is_none() {
            missing.push("front".to_string());
        }
        if self.left.is_none() {
            missing.push("left".to_string());
        }
        if self.right.is_none() {
            missing.push("right".to_string());
        }
        if self.back.is_none() {
            missing.push("back".to_string());
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Estados del ciclo de vida de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    PendingPayment,
    BookingAccepted,
    StartTrip,
    EndTrip,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Estados terminales: no admiten más transiciones
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::PendingPayment => "PENDING_PAYMENT",
            BookingStatus::BookingAccepted => "BOOKING_ACCEPTED",
            BookingStatus::StartTrip => "START_TRIP",
            BookingStatus::EndTrip => "END_TRIP",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Eventos que mueven la máquina de estados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingEvent {
    PaymentConfirmed,
    StartTrip,
    EndTrip,
    Finalize,
    Cancel,
}

impl BookingEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingEvent::PaymentConfirmed => "paymentConfirmed",
            BookingEvent::StartTrip => "startTrip",
            BookingEvent::EndTrip => "endTrip",
            BookingEvent::Finalize => "finalize",
            BookingEvent::Cancel => "cancel",
        }
    }
}

/// Reserva confirmada o en curso. Nunca se borra, solo cambia de estado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub customer_phone: String,
    pub vehicle_id: Uuid,
    pub package_id: Uuid,
    pub window: RentalWindow,
    pub pickup_option: PickupOption,
    pub delivery_address: Option<DeliveryAddress>,
    pub payment_method: PaymentMethod,
    pub coupon_code: Option<String>,
    /// Total cobrado, recalculado en el momento del checkout
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Estado destino para un evento, o error si la transición no es válida.
    /// No muta nada: las guardas fallidas dejan la reserva tal cual estaba.
    pub fn next_status(
        &self,
        event: BookingEvent,
        evidence: Option<&TripEvidence>,
    ) -> Result<BookingStatus, AppError> {
        let invalid = || AppError::InvalidTransition {
            from: self.status.as_str().to_string(),
            event: event.as_str().to_string(),
        };

        match event {
            BookingEvent::PaymentConfirmed => match self.status {
                BookingStatus::PendingPayment => Ok(BookingStatus::BookingAccepted),
                _ => Err(invalid()),
            },
            BookingEvent::StartTrip => match self.status {
                BookingStatus::BookingAccepted => {
                    Self::require_evidence(evidence)?;
                    Ok(BookingStatus::StartTrip)
                }
                _ => Err(invalid()),
            },
            BookingEvent::EndTrip => match self.status {
                BookingStatus::StartTrip => {
                    Self::require_evidence(evidence)?;
                    Ok(BookingStatus::EndTrip)
                }
                _ => Err(invalid()),
            },
            BookingEvent::Finalize => match self.status {
                BookingStatus::EndTrip => Ok(BookingStatus::Completed),
                _ => Err(invalid()),
            },
            // Una vez que el vehículo salió (START_TRIP), cancelar ya no es posible
            BookingEvent::Cancel => match self.status {
                BookingStatus::PendingPayment | BookingStatus::BookingAccepted => {
                    Ok(BookingStatus::Cancelled)
                }
                _ => Err(invalid()),
            },
        }
    }

    /// Aplicar un evento: corre la guarda y recién entonces muta el estado
    pub fn apply(
        &mut self,
        event: BookingEvent,
        evidence: Option<&TripEvidence>,
    ) -> Result<(), AppError> {
        let next = self.next_status(event, evidence)?;
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn require_evidence(evidence: Option<&TripEvidence>) -> Result<(), AppError> {
        let evidence = evidence.ok_or_else(|| AppError::IncompleteEvidence {
            missing: vec![
                "front".to_string(),
                "left".to_string(),
                "right".to_string(),
                "back".to_string(),
            ],
        })?;
        let missing = evidence.missing();
        if !missing.is_empty() {
            return Err(AppError::IncompleteEvidence { missing });
        }
        Ok(())
    }
}

/// Borrador de reserva: la selección en curso de un cliente antes de
/// confirmar. Estado de sesión, un solo escritor (el flujo del usuario).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub id: Uuid,
    pub customer_phone: String,
    pub vehicle_id: Uuid,
    pub window: RentalWindow,
    pub pickup_option: PickupOption,
    pub delivery_address: Option<DeliveryAddress>,
    /// Cupón aplicado; aplicar otro lo reemplaza, nunca se acumulan
    pub coupon_code: Option<String>,
    pub terms_accepted: bool,
    pub created_at: DateTime<Utc>,
}
