//! Servicio de checkout
//!
//! Orquesta el "confirmar y pagar": valida el borrador, recalcula el
//! precio en el momento del submit (nunca un total cacheado), crea la
//! reserva pendiente en el servicio de bookings, cobra con el gateway
//! y recién entonces acepta la reserva y emite el pedido.

use std::collections::HashSet;
use std::sync::Arc;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::clients::{
    BookingClient, CatalogClient, CouponClient, NewBookingRecord, PaymentClient, PaymentOutcome,
};
use crate::models::booking::{
    Booking, BookingDraft, BookingEvent, BookingStatus, PaymentMethod, PickupOption,
};
use crate::models::order::Order;
use crate::models::package::RentalPackage;
use crate::models::vehicle::Vehicle;
use crate::services::coupon_service::{CouponService, DiscountResult};
use crate::services::pricing_service::{PriceBreakdown, PricingService};
use crate::state::DraftStore;
use crate::utils::errors::{validation_error, AppError};

/// Reintentos acotados de inicialización de pago (solo inicialización;
/// crear y liquidar la reserva nunca se reintenta en silencio)
const PAYMENT_INIT_RETRIES: u32 = 2;

/// Cotización completa de un borrador: selección de paquete + desglose
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub vehicle: Vehicle,
    pub package: RentalPackage,
    pub requested_days: i64,
    pub extra_hours: i64,
    pub breakdown: PriceBreakdown,
    pub discount: Option<DiscountResult>,
    pub payable: Decimal,
}

pub struct CheckoutService {
    catalog: Arc<dyn CatalogClient>,
    coupons: Arc<dyn CouponClient>,
    bookings: Arc<dyn BookingClient>,
    payments: Arc<dyn PaymentClient>,
    drafts: DraftStore,
    /// Borradores con un confirm en vuelo: a lo sumo uno por borrador
    in_flight: RwLock<HashSet<Uuid>>,
}

impl CheckoutService {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        coupons: Arc<dyn CouponClient>,
        bookings: Arc<dyn BookingClient>,
        payments: Arc<dyn PaymentClient>,
        drafts: DraftStore,
    ) -> Self {
        Self {
            catalog,
            coupons,
            bookings,
            payments,
            drafts,
            in_flight: RwLock::new(HashSet::new()),
        }
    }

    /// Cotizar un borrador: selección de paquete, sobrecargos, impuesto,
    /// depósito y cupón, todo recalculado contra el catálogo actual.
    /// Re-invocar esta operación es el `refresh()` del flujo.
    pub async fn quote(&self, draft: &BookingDraft) -> Result<Quote, AppError> {
        let vehicle = self.catalog.get_vehicle(draft.vehicle_id).await?;
        let packages = self.catalog.list_packages(vehicle.category_id).await?;

        let requested_days = draft.window.total_days();
        let extra_hours = draft.window.extra_hours();

        let package = PricingService::select_best_package(&packages, requested_days)?;
        let extra_cost =
            PricingService::compute_extra_cost(&package, requested_days, extra_hours, &packages)?;
        let breakdown = PricingService::compute_total(
            package.price,
            extra_cost,
            draft.pickup_option,
            vehicle.deposit,
        );

        let discount = match &draft.coupon_code {
            Some(code) => {
                let directory = self.coupons.list_coupons().await?;
                Some(CouponService::apply_coupon(
                    code,
                    breakdown.base_price,
                    breakdown.delivery_charge,
                    &directory,
                )?)
            }
            None => None,
        };

        let discount_amount = discount
            .as_ref()
            .map(|d| d.discount_amount)
            .unwrap_or(Decimal::ZERO);
        let payable = breakdown.payable(discount_amount);

        Ok(Quote {
            vehicle,
            package,
            requested_days,
            extra_hours,
            breakdown,
            discount,
            payable,
        })
    }

    /// Confirmar y pagar un borrador. A lo sumo un confirm en vuelo por
    /// borrador: un segundo intento mientras hay uno corriendo se rechaza
    /// para no duplicar reservas.
    pub async fn confirm_and_pay(
        &self,
        draft_id: Uuid,
        payment_method: PaymentMethod,
    ) -> Result<Order, AppError> {
        {
            let mut in_flight = self.in_flight.write().await;
            if !in_flight.insert(draft_id) {
                return Err(AppError::Conflict(
                    "A checkout for this draft is already in progress".to_string(),
                ));
            }
        }

        let result = self.confirm_inner(draft_id, payment_method).await;

        self.in_flight.write().await.remove(&draft_id);
        result
    }

    async fn confirm_inner(
        &self,
        draft_id: Uuid,
        payment_method: PaymentMethod,
    ) -> Result<Order, AppError> {
        let draft = self
            .drafts
            .load(draft_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Draft '{}' not found", draft_id)))?;

        // 1. Validación de campos: bloquea antes de cualquier llamada de red
        Self::validate_draft(&draft)?;

        // 2. Recalcular el precio en el momento del submit
        let quote = self.quote(&draft).await?;
        log::info!(
            "💰 Draft {}: total {} (descuento {})",
            draft.id,
            quote.payable,
            quote
                .discount
                .as_ref()
                .map(|d| d.discount_amount)
                .unwrap_or(Decimal::ZERO)
        );

        // 3. Crear la reserva pendiente en el servicio de bookings
        let record = NewBookingRecord {
            draft_id: draft.id,
            customer_phone: draft.customer_phone.clone(),
            vehicle_id: draft.vehicle_id,
            package_id: quote.package.id,
            window: draft.window,
            pickup_option: draft.pickup_option,
            delivery_address: draft.delivery_address.clone(),
            payment_method,
            coupon_code: draft.coupon_code.clone(),
            total_amount: quote.payable,
            amount_minor: Self::to_minor_units(quote.payable)?,
        };
        let session = self.bookings.create_booking(&record).await?;
        log::info!(
            "📝 Reserva {} creada, sesión de pago {}",
            session.booking_id,
            session.payment_session_id
        );

        let now = chrono::Utc::now();
        let mut booking = Booking {
            id: session.booking_id,
            customer_phone: draft.customer_phone.clone(),
            vehicle_id: draft.vehicle_id,
            package_id: quote.package.id,
            window: draft.window,
            pickup_option: draft.pickup_option,
            delivery_address: draft.delivery_address.clone(),
            payment_method,
            coupon_code: draft.coupon_code.clone(),
            total_amount: quote.payable,
            status: BookingStatus::PendingPayment,
            created_at: now,
            updated_at: now,
        };

        // 4. Cobrar según el método elegido
        match payment_method {
            PaymentMethod::Online => {
                let outcome = self.collect_with_retry(&session).await?;
                match outcome {
                    PaymentOutcome::Completed(proof) => {
                        self.bookings.verify_payment(session.booking_id, &proof).await?;
                        booking.apply(BookingEvent::PaymentConfirmed, None)?;
                    }
                    PaymentOutcome::Dismissed => {
                        // Widget cerrado sin pagar: la reserva queda
                        // PENDING_PAYMENT y el borrador se conserva para
                        // reintentar el flujo completo
                        log::warn!(
                            "🚪 Pago abandonado, reserva {} sigue pendiente",
                            session.booking_id
                        );
                        return Err(AppError::PaymentAbandoned);
                    }
                    PaymentOutcome::Failed(reason) => {
                        return Err(AppError::BookingFailed(reason));
                    }
                }
            }
            PaymentMethod::CashOnCenter => {
                // Sin gateway de por medio: se acepta directo
                booking.apply(BookingEvent::PaymentConfirmed, None)?;
            }
        }

        // 5. Flujo completo: el borrador de sesión se limpia
        self.drafts.clear(draft.id).await;
        log::info!("✅ Reserva {} aceptada", booking.id);

        // 6. Pedido desnormalizado como resultado de la operación
        let discount_amount = quote
            .discount
            .as_ref()
            .map(|d| d.discount_amount)
            .unwrap_or(Decimal::ZERO);

        Ok(Order {
            booking_id: booking.id,
            vehicle_id: quote.vehicle.id,
            vehicle_name: quote.vehicle.name.clone(),
            package_id: quote.package.id,
            package_days: quote.package.days,
            window: booking.window,
            pickup_option: booking.pickup_option,
            payment_method,
            status: booking.status,
            breakdown: quote.breakdown.clone(),
            coupon_code: booking.coupon_code.clone(),
            discount: discount_amount,
            amount_charged: quote.payable,
            created_at: booking.created_at,
        })
    }

    /// Cobro online con reintento acotado: se reintenta la inicialización
    /// fallida, sea un error de transporte hacia el gateway o un fallo que
    /// el gateway reporta. Un pago abandonado nunca se reintenta.
    async fn collect_with_retry(
        &self,
        session: &crate::clients::BookingSession,
    ) -> Result<PaymentOutcome, AppError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.payments.collect(session).await {
                Ok(PaymentOutcome::Failed(reason)) if attempt <= PAYMENT_INIT_RETRIES => {
                    log::warn!(
                        "🔁 Inicialización de pago falló ({}), reintento {}/{}",
                        reason,
                        attempt,
                        PAYMENT_INIT_RETRIES
                    );
                }
                Err(AppError::ExternalApi(reason)) if attempt <= PAYMENT_INIT_RETRIES => {
                    log::warn!(
                        "🔁 Gateway de pagos inalcanzable ({}), reintento {}/{}",
                        reason,
                        attempt,
                        PAYMENT_INIT_RETRIES
                    );
                }
                other => return other,
            }
        }
    }

    fn validate_draft(draft: &BookingDraft) -> Result<(), AppError> {
        if !draft.terms_accepted {
            return Err(validation_error(
                "terms_accepted",
                "Terms and conditions must be accepted before paying",
            ));
        }

        if draft.pickup_option == PickupOption::DeliveryAtLocation {
            let address = draft.delivery_address.as_ref().ok_or_else(|| {
                validation_error(
                    "delivery_address",
                    "Delivery address is required for delivery at location",
                )
            })?;
            if address.address.trim().is_empty() {
                return Err(validation_error(
                    "delivery_address.address",
                    "Delivery address cannot be empty",
                ));
            }
            if !crate::utils::validation::is_valid_postal_code(&address.postal_code) {
                return Err(validation_error(
                    "delivery_address.postal_code",
                    "Postal code must be a 6-digit PIN",
                ));
            }
        }

        Ok(())
    }

    /// Convertir un importe en unidades mayores a unidades menores (paise),
    /// como lo exige el gateway de pagos
    pub fn to_minor_units(amount: Decimal) -> Result<i64, AppError> {
        (amount * Decimal::new(100, 0))
            .round()
            .to_i64()
            .ok_or_else(|| AppError::Internal("Amount out of range for minor units".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units_conversion() {
        assert_eq!(
            CheckoutService::to_minor_units(Decimal::new(4748, 0)).unwrap(),
            474_800
        );
        assert_eq!(
            CheckoutService::to_minor_units(Decimal::new(438825, 2)).unwrap(),
            438_825
        );
        assert_eq!(CheckoutService::to_minor_units(Decimal::ZERO).unwrap(), 0);
    }
}
