//! Servicio de ciclo de vida del viaje
//!
//! Inicio y fin de viaje (con evidencia fotográfica), cancelación y
//! cierre. El servicio remoto de bookings es la fuente de verdad: la
//! guarda local corre primero, después la llamada remota, y el estado
//! local se concilia recién con el ack.

use std::sync::Arc;
use uuid::Uuid;

use crate::clients::BookingClient;
use crate::models::booking::{Booking, BookingEvent, TripEvidence};
use crate::utils::errors::AppError;

pub struct TripService {
    bookings: Arc<dyn BookingClient>,
}

impl TripService {
    pub fn new(bookings: Arc<dyn BookingClient>) -> Self {
        Self { bookings }
    }

    pub async fn get_booking(&self, booking_id: Uuid) -> Result<Booking, AppError> {
        self.bookings.get_booking(booking_id).await
    }

    /// Iniciar el viaje: exige las cuatro fotos de inicio
    pub async fn start_trip(
        &self,
        booking_id: Uuid,
        evidence: TripEvidence,
    ) -> Result<Booking, AppError> {
        let mut booking = self.bookings.get_booking(booking_id).await?;

        // Guarda local antes de tocar la red: si falla no hay efecto alguno
        booking.next_status(BookingEvent::StartTrip, Some(&evidence))?;

        self.bookings.start_trip(booking_id, &evidence).await?;
        booking.apply(BookingEvent::StartTrip, Some(&evidence))?;

        log::info!("🏁 Viaje iniciado para la reserva {}", booking_id);
        Ok(booking)
    }

    /// Terminar el viaje: exige las cuatro fotos de fin
    pub async fn end_trip(
        &self,
        booking_id: Uuid,
        evidence: TripEvidence,
    ) -> Result<Booking, AppError> {
        let mut booking = self.bookings.get_booking(booking_id).await?;

        booking.next_status(BookingEvent::EndTrip, Some(&evidence))?;

        self.bookings.end_trip(booking_id, &evidence).await?;
        booking.apply(BookingEvent::EndTrip, Some(&evidence))?;

        log::info!("🔚 Viaje terminado para la reserva {}", booking_id);
        Ok(booking)
    }

    /// Cancelar: solo antes de que el vehículo salga
    pub async fn cancel(&self, booking_id: Uuid) -> Result<Booking, AppError> {
        let mut booking = self.bookings.get_booking(booking_id).await?;

        booking.next_status(BookingEvent::Cancel, None)?;

        self.bookings.cancel_booking(booking_id).await?;
        booking.apply(BookingEvent::Cancel, None)?;

        log::info!("🚫 Reserva {} cancelada", booking_id);
        Ok(booking)
    }

    /// Cerrar la reserva una vez liquidados daños, multas y recargos por
    /// demora. El cierre también se reporta al servicio remoto: la reserva
    /// queda COMPLETED en la fuente de verdad, no solo en memoria.
    pub async fn finalize(&self, booking_id: Uuid) -> Result<Booking, AppError> {
        let mut booking = self.bookings.get_booking(booking_id).await?;

        booking.next_status(BookingEvent::Finalize, None)?;

        self.bookings.finalize_booking(booking_id).await?;
        booking.apply(BookingEvent::Finalize, None)?;

        log::info!("🏷️ Reserva {} completada", booking_id);
        Ok(booking)
    }
}
