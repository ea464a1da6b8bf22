//! Modelo de Order
//!
//! Vista desnormalizada de una reserva confirmada: reserva + vehículo +
//! paquete + desglose de precio. Derivada, no autoritativa; se usa para
//! mostrar el pedido y facturar.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::{BookingStatus, PaymentMethod, PickupOption};
use crate::models::package::RentalWindow;
use crate::services::pricing_service::PriceBreakdown;

/// Pedido confirmado, listo para mostrar y facturar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub booking_id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub package_id: Uuid,
    pub package_days: i64,
    pub window: RentalWindow,
    pub pickup_option: PickupOption,
    pub payment_method: PaymentMethod,
    pub status: BookingStatus,
    pub breakdown: PriceBreakdown,
    pub coupon_code: Option<String>,
    pub discount: Decimal,
    /// Total cobrado: total antes de descuento menos descuento, nunca negativo
    pub amount_charged: Decimal,
    pub created_at: DateTime<Utc>,
}
