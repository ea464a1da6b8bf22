//! DTOs del flujo de checkout
//!
//! Borrador, cotización, cupón y confirmación. Los montos salen
//! redondeados a 2 decimales recién acá.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::money;
use crate::models::booking::{PaymentMethod, PickupOption};
use crate::models::order::Order;
use crate::services::checkout_service::Quote;
use crate::services::pricing_service::PriceBreakdown;

/// Request para crear o reemplazar un borrador de reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDraftRequest {
    pub vehicle_id: String,
    /// RFC3339
    pub starts_at: String,
    /// RFC3339
    pub ends_at: String,
    pub pickup_option: PickupOption,
    pub delivery_address: Option<DeliveryAddressRequest>,
    pub terms_accepted: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DeliveryAddressRequest {
    #[validate(length(min = 5, max = 300))]
    pub address: String,

    #[validate(length(equal = 6))]
    pub postal_code: String,

    pub landmark: Option<String>,
}

/// Request para aplicar un cupón al borrador
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyCouponRequest {
    #[validate(length(min = 1, max = 40))]
    pub code: String,
}

/// Request para confirmar y pagar
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub payment_method: PaymentMethod,
}

/// Response con el id del borrador creado
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft_id: String,
}

/// Desglose de precio, línea por línea
#[derive(Debug, Serialize)]
pub struct PriceBreakdownResponse {
    pub base_price: String,
    pub delivery_charge: String,
    pub tax: String,
    pub deposit: String,
    pub total_before_discount: String,
}

impl From<&PriceBreakdown> for PriceBreakdownResponse {
    fn from(breakdown: &PriceBreakdown) -> Self {
        Self {
            base_price: money(breakdown.base_price),
            delivery_charge: money(breakdown.delivery_charge),
            tax: money(breakdown.tax),
            deposit: money(breakdown.deposit),
            total_before_discount: money(breakdown.total_before_discount),
        }
    }
}

/// Response de cotización completa
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub package_id: String,
    pub package_days: i64,
    pub requested_days: i64,
    pub extra_hours: i64,
    pub breakdown: PriceBreakdownResponse,
    pub coupon_code: Option<String>,
    pub discount: String,
    pub payable: String,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        Self {
            vehicle_id: quote.vehicle.id.to_string(),
            vehicle_name: quote.vehicle.name.clone(),
            package_id: quote.package.id.to_string(),
            package_days: quote.package.days,
            requested_days: quote.requested_days,
            extra_hours: quote.extra_hours,
            breakdown: PriceBreakdownResponse::from(&quote.breakdown),
            coupon_code: quote
                .discount
                .as_ref()
                .map(|d| d.applied_coupon.code.clone()),
            discount: money(
                quote
                    .discount
                    .as_ref()
                    .map(|d| d.discount_amount)
                    .unwrap_or_default(),
            ),
            payable: money(quote.payable),
        }
    }
}

/// Response del pedido confirmado
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub booking_id: String,
    pub vehicle_name: String,
    pub package_days: i64,
    pub starts_at: String,
    pub ends_at: String,
    pub pickup_option: PickupOption,
    pub payment_method: PaymentMethod,
    pub status: String,
    pub breakdown: PriceBreakdownResponse,
    pub coupon_code: Option<String>,
    pub discount: String,
    pub amount_charged: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            booking_id: order.booking_id.to_string(),
            vehicle_name: order.vehicle_name.clone(),
            package_days: order.package_days,
            starts_at: order.window.starts_at.to_rfc3339(),
            ends_at: order.window.ends_at.to_rfc3339(),
            pickup_option: order.pickup_option,
            payment_method: order.payment_method,
            status: order.status.as_str().to_string(),
            breakdown: PriceBreakdownResponse::from(&order.breakdown),
            coupon_code: order.coupon_code.clone(),
            discount: money(order.discount),
            amount_charged: money(order.amount_charged),
        }
    }
}
