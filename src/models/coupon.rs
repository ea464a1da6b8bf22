//! Modelo de Coupon
//!
//! Cupones del directorio externo. El match por código es case-insensitive
//! y el descuento calculado siempre queda acotado por el motor de cupones.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tipo de descuento del cupón
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponKind {
    Percentage,
    FixedValue,
}

/// Cupón de descuento (dato de referencia del directorio de cupones)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub kind: CouponKind,
    /// Porcentaje (0-100) o valor fijo en unidades mayores, según `kind`
    pub value: Decimal,
    pub active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Verificar si el cupón ya venció
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(expiry) if now > expiry)
    }
}
