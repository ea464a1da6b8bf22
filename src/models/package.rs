//! Modelo de RentalPackage y RentalWindow
//!
//! Un paquete es una oferta de precio fijo por una duración fija en días,
//! ligada a una categoría de vehículo. La ventana de alquiler deriva los
//! días completos y las horas sueltas que usa el motor de precios.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::errors::{validation_error, AppError};

/// Paquete de alquiler por días (dato de referencia del catálogo)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalPackage {
    pub id: Uuid,
    pub category_id: Uuid,
    /// Duración en días completos, siempre >= 1
    pub days: i64,
    /// Precio plano por esa duración
    pub price: Decimal,
    /// Solo los paquetes activos son seleccionables
    pub active: bool,
}

/// Ventana de alquiler: instante de inicio y fin
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RentalWindow {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl RentalWindow {
    /// Crear una ventana validando que el fin sea posterior al inicio
    pub fn new(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Result<Self, AppError> {
        if ends_at <= starts_at {
            return Err(validation_error(
                "rental_window",
                "End of rental must be after its start",
            ));
        }
        Ok(Self { starts_at, ends_at })
    }

    /// Días completos del alquiler. Un alquiler nunca dura cero días:
    /// si el cálculo da 0 se fuerza a 1.
    pub fn total_days(&self) -> i64 {
        let days = (self.ends_at - self.starts_at).num_days();
        days.max(1)
    }

    /// Horas sueltas que quedan tras contar los días completos
    pub fn extra_hours(&self) -> i64 {
        let total_hours = (self.ends_at - self.starts_at).num_hours();
        total_hours % 24
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window(hours: i64) -> RentalWindow {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        RentalWindow::new(start, start + chrono::Duration::hours(hours)).unwrap()
    }

    #[test]
    fn test_rejects_inverted_window() {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        assert!(RentalWindow::new(start, start).is_err());
        assert!(RentalWindow::new(start, start - chrono::Duration::hours(1)).is_err());
    }

    #[test]
    fn test_zero_days_coerced_to_one() {
        let w = window(5);
        assert_eq!(w.total_days(), 1);
        assert_eq!(w.extra_hours(), 5);
    }

    #[test]
    fn test_days_and_leftover_hours() {
        let w = window(24 * 10 + 7);
        assert_eq!(w.total_days(), 10);
        assert_eq!(w.extra_hours(), 7);

        let exact = window(24 * 3);
        assert_eq!(exact.total_days(), 3);
        assert_eq!(exact.extra_hours(), 0);
    }
}
