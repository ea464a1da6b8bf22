//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: configuración, clientes de colaboradores
//! y el almacén de borradores de sesión.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::clients::{BookingClient, CatalogClient, CouponClient, PaymentClient};
use crate::config::environment::EnvironmentConfig;
use crate::models::booking::BookingDraft;
use crate::services::checkout_service::CheckoutService;
use crate::services::otp_service::OtpService;
use crate::services::trip_service::TripService;

/// Almacén de borradores de checkout, con ciclo de vida explícito:
/// se puebla al empezar el flujo y se limpia al completar o abandonar.
/// Un solo escritor por borrador (el flujo del usuario), sin hazard de
/// mutación concurrente.
#[derive(Clone, Default)]
pub struct DraftStore {
    drafts: Arc<RwLock<HashMap<Uuid, BookingDraft>>>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, draft_id: Uuid) -> Option<BookingDraft> {
        self.drafts.read().await.get(&draft_id).cloned()
    }

    pub async fn save(&self, draft: BookingDraft) {
        self.drafts.write().await.insert(draft.id, draft);
    }

    pub async fn clear(&self, draft_id: Uuid) {
        self.drafts.write().await.remove(&draft_id);
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<dyn CatalogClient>,
    pub coupons: Arc<dyn CouponClient>,
    pub bookings: Arc<dyn BookingClient>,
    pub payments: Arc<dyn PaymentClient>,
    pub drafts: DraftStore,
    pub checkout: Arc<CheckoutService>,
    pub trips: Arc<TripService>,
    pub otp: Arc<OtpService>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        catalog: Arc<dyn CatalogClient>,
        coupons: Arc<dyn CouponClient>,
        bookings: Arc<dyn BookingClient>,
        payments: Arc<dyn PaymentClient>,
        otp: Arc<OtpService>,
    ) -> Self {
        let drafts = DraftStore::new();
        let checkout = Arc::new(CheckoutService::new(
            catalog.clone(),
            coupons.clone(),
            bookings.clone(),
            payments.clone(),
            drafts.clone(),
        ));
        let trips = Arc::new(TripService::new(bookings.clone()));

        Self {
            config,
            catalog,
            coupons,
            bookings,
            payments,
            drafts,
            checkout,
            trips,
            otp,
        }
    }
}
