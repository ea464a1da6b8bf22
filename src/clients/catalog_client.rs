//! Cliente del servicio de catálogo
//!
//! Vehículos y paquetes son datos de referencia que viven en el servicio
//! de catálogo; acá solo se leen. El trait permite inyectar un mock en
//! los tests de flujo.

use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

use crate::models::package::RentalPackage;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn list_packages(&self, category_id: Uuid) -> Result<Vec<RentalPackage>, AppError>;
    async fn get_vehicle(&self, vehicle_id: Uuid) -> Result<Vehicle, AppError>;
}

/// Implementación HTTP contra el servicio de catálogo
pub struct HttpCatalogClient {
    base_url: String,
    client: Client,
}

impl HttpCatalogClient {
    pub fn new(base_url: String, client: Client) -> Self {
        Self { base_url, client }
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn list_packages(&self, category_id: Uuid) -> Result<Vec<RentalPackage>, AppError> {
        let url = format!("{}/categories/{}/packages", self.base_url, category_id);
        log::info!("📦 Consultando paquetes de la categoría {}", category_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Catalog request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API error {}: {}",
                status, body
            )));
        }

        response
            .json::<Vec<RentalPackage>>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error parsing packages response: {}", e)))
    }

    async fn get_vehicle(&self, vehicle_id: Uuid) -> Result<Vehicle, AppError> {
        let url = format!("{}/vehicles/{}", self.base_url, vehicle_id);
        log::info!("🛵 Consultando vehículo {}", vehicle_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Catalog request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "Vehicle '{}' not found",
                vehicle_id
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API error {}: {}",
                status, body
            )));
        }

        response
            .json::<Vehicle>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error parsing vehicle response: {}", e)))
    }
}
