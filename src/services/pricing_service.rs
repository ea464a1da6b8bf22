//! Servicio de precios
//!
//! Este módulo contiene la selección de paquete por duración y el cálculo
//! del total: precio base + entrega + impuesto + depósito. Funciones puras
//! sobre `Decimal`; nada de redondeos intermedios, se redondea solo al
//! serializar para presentación.

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::booking::PickupOption;
use crate::models::package::RentalPackage;
use crate::utils::errors::AppError;

lazy_static! {
    /// Tarifa fija por hora suelta
    pub static ref HOURLY_RATE: Decimal = Decimal::new(100, 0);
    /// Recargo fijo por entrega a domicilio
    pub static ref DELIVERY_FEE: Decimal = Decimal::new(100, 0);
    /// Impuesto sobre base + entrega (18%)
    pub static ref TAX_RATE: Decimal = Decimal::new(18, 2);
}

/// Desglose de precio con cada línea por separado, nunca solo el total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub delivery_charge: Decimal,
    pub tax: Decimal,
    pub deposit: Decimal,
    pub total_before_discount: Decimal,
}

impl PriceBreakdown {
    /// Total a cobrar tras aplicar un descuento, con piso en 0
    pub fn payable(&self, discount: Decimal) -> Decimal {
        (self.total_before_discount - discount).max(Decimal::ZERO)
    }
}

pub struct PricingService;

impl PricingService {
    /// Elegir el paquete que mejor cubre la duración pedida: se ordenan los
    /// paquetes por días descendente y se toma el primero cuyo `days` no
    /// supere `requested_days`. Si todos son más largos que lo pedido, se
    /// devuelve el paquete más corto disponible (el último del orden
    /// descendente).
    pub fn select_best_package(
        packages: &[RentalPackage],
        requested_days: i64,
    ) -> Result<RentalPackage, AppError> {
        let mut candidates: Vec<&RentalPackage> =
            packages.iter().filter(|p| p.active && p.days >= 1).collect();
        if candidates.is_empty() {
            return Err(AppError::NotFound(
                "No active rental packages for this category".to_string(),
            ));
        }
        if requested_days < 1 {
            return Err(AppError::BadRequest(
                "Requested rental duration must be at least one day".to_string(),
            ));
        }

        candidates.sort_by(|a, b| b.days.cmp(&a.days));

        let selected = candidates
            .iter()
            .find(|p| p.days <= requested_days)
            .or_else(|| candidates.last())
            .copied();

        // candidates nunca está vacío acá, siempre hay un último
        selected
            .cloned()
            .ok_or_else(|| AppError::Internal("Package selection produced no result".to_string()))
    }

    /// Sobrecargo por días y horas que exceden el paquete elegido.
    /// Los días extra se cobran a la tarifa del paquete de un día; si hacen
    /// falta días extra y no existe paquete de un día, es una violación de
    /// integridad del catálogo.
    pub fn compute_extra_cost(
        selected: &RentalPackage,
        requested_days: i64,
        extra_hours: i64,
        packages: &[RentalPackage],
    ) -> Result<Decimal, AppError> {
        let extra_days = (requested_days - selected.days).max(0);

        let extra_days_cost = if extra_days > 0 {
            let one_day = packages
                .iter()
                .filter(|p| p.active)
                .find(|p| p.days == 1)
                .ok_or(AppError::MissingOneDayPackage)?;
            Decimal::from(extra_days) * one_day.price
        } else {
            Decimal::ZERO
        };

        let extra_hours_cost = Decimal::from(extra_hours.max(0)) * *HOURLY_RATE;

        Ok(extra_days_cost + extra_hours_cost)
    }

    /// Calcular el desglose completo: base + entrega + impuesto + depósito
    pub fn compute_total(
        package_price: Decimal,
        extra_cost: Decimal,
        pickup_option: PickupOption,
        deposit: Decimal,
    ) -> PriceBreakdown {
        let base_price = package_price + extra_cost;
        let delivery_charge = match pickup_option {
            PickupOption::DeliveryAtLocation => *DELIVERY_FEE,
            PickupOption::SelfPickup => Decimal::ZERO,
        };
        let taxable = base_price + delivery_charge;
        let tax = taxable * *TAX_RATE;
        let total_before_discount = base_price + delivery_charge + tax + deposit;

        PriceBreakdown {
            base_price,
            delivery_charge,
            tax,
            deposit,
            total_before_discount,
        }
    }
}
