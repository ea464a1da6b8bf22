//! Controller del flujo de checkout
//!
//! Arma y mantiene el borrador de sesión, cotiza, aplica/quita cupón y
//! dispara el confirmar-y-pagar. La validación de campos corre acá,
//! antes de llamar a cualquier servicio.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::checkout_dto::{
    ApplyCouponRequest, ConfirmRequest, CreateDraftRequest, DraftResponse, OrderResponse,
    QuoteResponse,
};
use crate::dto::ApiResponse;
use crate::models::booking::{BookingDraft, DeliveryAddress, PickupOption};
use crate::models::package::RentalWindow;
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_datetime, validate_uuid};

pub struct CheckoutController {
    state: AppState,
}

impl CheckoutController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Crear (o reemplazar) el borrador de reserva de la sesión
    pub async fn create_draft(
        &self,
        customer_phone: String,
        request: CreateDraftRequest,
    ) -> Result<ApiResponse<DraftResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let vehicle_id = validate_uuid(&request.vehicle_id)
            .map_err(|_| validation_error("vehicle_id", "Must be a valid UUID"))?;
        let starts_at = validate_datetime(&request.starts_at)
            .map_err(|_| validation_error("starts_at", "Must be an RFC3339 datetime"))?;
        let ends_at = validate_datetime(&request.ends_at)
            .map_err(|_| validation_error("ends_at", "Must be an RFC3339 datetime"))?;

        let window = RentalWindow::new(starts_at, ends_at)?;

        let delivery_address = match (&request.pickup_option, request.delivery_address) {
            (PickupOption::DeliveryAtLocation, Some(address)) => {
                address
                    .validate()
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                Some(DeliveryAddress {
                    address: address.address,
                    postal_code: address.postal_code,
                    landmark: address.landmark,
                })
            }
            (PickupOption::DeliveryAtLocation, None) => {
                return Err(validation_error(
                    "delivery_address",
                    "Delivery address is required for delivery at location",
                ));
            }
            (PickupOption::SelfPickup, _) => None,
        };

        let draft = BookingDraft {
            id: Uuid::new_v4(),
            customer_phone,
            vehicle_id,
            window,
            pickup_option: request.pickup_option,
            delivery_address,
            coupon_code: None,
            terms_accepted: request.terms_accepted,
            created_at: Utc::now(),
        };

        let draft_id = draft.id;
        self.state.drafts.save(draft).await;

        Ok(ApiResponse::success(DraftResponse {
            draft_id: draft_id.to_string(),
        }))
    }

    /// Cotizar el borrador contra el catálogo actual
    pub async fn quote(&self, draft_id: Uuid) -> Result<QuoteResponse, AppError> {
        let draft = self
            .state
            .drafts
            .load(draft_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Draft '{}' not found", draft_id)))?;

        let quote = self.state.checkout.quote(&draft).await?;
        Ok(QuoteResponse::from(&quote))
    }

    /// Aplicar un cupón. Un segundo cupón reemplaza al primero.
    /// Si el código no existe o venció, el borrador queda como estaba.
    pub async fn apply_coupon(
        &self,
        draft_id: Uuid,
        request: ApplyCouponRequest,
    ) -> Result<QuoteResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut draft = self
            .state
            .drafts
            .load(draft_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Draft '{}' not found", draft_id)))?;

        draft.coupon_code = Some(request.code);
        let quote = self.state.checkout.quote(&draft).await?;

        // Cupón válido: recién ahora se persiste en el borrador
        self.state.drafts.save(draft).await;
        Ok(QuoteResponse::from(&quote))
    }

    /// Quitar el cupón aplicado: el descuento vuelve a 0
    pub async fn remove_coupon(&self, draft_id: Uuid) -> Result<QuoteResponse, AppError> {
        let mut draft = self
            .state
            .drafts
            .load(draft_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Draft '{}' not found", draft_id)))?;

        draft.coupon_code = None;
        self.state.drafts.save(draft.clone()).await;

        let quote = self.state.checkout.quote(&draft).await?;
        Ok(QuoteResponse::from(&quote))
    }

    /// Confirmar y pagar
    pub async fn confirm(
        &self,
        draft_id: Uuid,
        request: ConfirmRequest,
    ) -> Result<ApiResponse<OrderResponse>, AppError> {
        let order = self
            .state
            .checkout
            .confirm_and_pay(draft_id, request.payment_method)
            .await?;

        Ok(ApiResponse::success_with_message(
            OrderResponse::from(&order),
            "Booking confirmed".to_string(),
        ))
    }
}
