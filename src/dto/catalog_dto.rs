//! DTOs del catálogo (paquetes y vehículos)

use serde::Serialize;

use crate::dto::money;
use crate::models::package::RentalPackage;
use crate::models::vehicle::Vehicle;

/// Response de paquete para listados
#[derive(Debug, Serialize)]
pub struct PackageResponse {
    pub id: String,
    pub days: i64,
    pub price: String,
}

impl From<RentalPackage> for PackageResponse {
    fn from(package: RentalPackage) -> Self {
        Self {
            id: package.id.to_string(),
            days: package.days,
            price: money(package.price),
        }
    }
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub name: String,
    pub model: Option<String>,
    pub per_day_rate: String,
    pub deposit: String,
    pub category_id: String,
    pub store_id: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            name: vehicle.name,
            model: vehicle.model,
            per_day_rate: money(vehicle.per_day_rate),
            deposit: money(vehicle.deposit),
            category_id: vehicle.category_id.to_string(),
            store_id: vehicle.store_id.to_string(),
        }
    }
}
