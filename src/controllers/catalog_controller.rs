//! Controller de catálogo
//!
//! Lecturas delgadas sobre el servicio de catálogo: datos de referencia
//! para que la UI liste paquetes y muestre el vehículo.

use uuid::Uuid;

use crate::dto::catalog_dto::{PackageResponse, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct CatalogController {
    state: AppState,
}

impl CatalogController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn list_packages(&self, category_id: Uuid) -> Result<Vec<PackageResponse>, AppError> {
        let packages = self.state.catalog.list_packages(category_id).await?;
        Ok(packages
            .into_iter()
            .filter(|p| p.active)
            .map(PackageResponse::from)
            .collect())
    }

    pub async fn get_vehicle(&self, vehicle_id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self.state.catalog.get_vehicle(vehicle_id).await?;
        Ok(VehicleResponse::from(vehicle))
    }
}
