//! Cliente del directorio de cupones
//!
//! El directorio es otro colaborador de solo lectura: se trae la lista
//! completa y el motor de cupones resuelve el match localmente.

use async_trait::async_trait;
use reqwest::Client;

use crate::models::coupon::Coupon;
use crate::utils::errors::AppError;

#[async_trait]
pub trait CouponClient: Send + Sync {
    async fn list_coupons(&self) -> Result<Vec<Coupon>, AppError>;
}

/// Implementación HTTP contra el directorio de cupones
pub struct HttpCouponClient {
    base_url: String,
    client: Client,
}

impl HttpCouponClient {
    pub fn new(base_url: String, client: Client) -> Self {
        Self { base_url, client }
    }
}

#[async_trait]
impl CouponClient for HttpCouponClient {
    async fn list_coupons(&self) -> Result<Vec<Coupon>, AppError> {
        let url = format!("{}/coupons", self.base_url);
        log::info!("🎟️ Consultando directorio de cupones");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Coupon directory request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Coupon directory error {}: {}",
                status, body
            )));
        }

        response
            .json::<Vec<Coupon>>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error parsing coupons response: {}", e)))
    }
}
