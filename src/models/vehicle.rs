//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como lo expone el servicio
//! de catálogo. Datos de referencia, solo lectura para este servicio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehículo del catálogo (dato de referencia, inmutable aquí)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub model: Option<String>,
    /// Tarifa base por día, en unidades mayores de moneda
    pub per_day_rate: Decimal,
    /// Depósito de seguridad que se suma al total a pagar
    pub deposit: Decimal,
    /// Categoría para buscar los paquetes aplicables
    pub category_id: Uuid,
    /// Tienda / ubicación donde está el vehículo
    pub store_id: Uuid,
}
