//! Servicio de cupones
//!
//! Aplica un cupón del directorio contra el precio base. El descuento
//! queda acotado: nunca negativo y nunca mayor que base + entrega.
//! Aplicar un segundo cupón reemplaza al primero (regla de negocio
//! heredada, no se acumulan); quitarlo deja el descuento en 0.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::coupon::{Coupon, CouponKind};
use crate::utils::errors::AppError;

/// Resultado de aplicar un cupón
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountResult {
    pub applied_coupon: Coupon,
    pub discount_amount: Decimal,
}

pub struct CouponService;

impl CouponService {
    /// Buscar el cupón por código (case-insensitive) y calcular el descuento
    pub fn apply_coupon(
        code: &str,
        base: Decimal,
        delivery_charge: Decimal,
        catalog: &[Coupon],
    ) -> Result<DiscountResult, AppError> {
        let normalized = code.trim();

        let coupon = catalog
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(normalized))
            .ok_or_else(|| AppError::CouponNotFound(normalized.to_string()))?;

        if !coupon.active || coupon.is_expired(Utc::now()) {
            return Err(AppError::CouponExpired(coupon.code.clone()));
        }

        let raw_discount = match coupon.kind {
            CouponKind::Percentage => base * coupon.value / Decimal::new(100, 0),
            CouponKind::FixedValue => coupon.value,
        };

        // Acotado: ni negativo ni mayor que lo descontable
        let discount_amount = raw_discount.max(Decimal::ZERO).min(base + delivery_charge);

        Ok(DiscountResult {
            applied_coupon: coupon.clone(),
            discount_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn coupon(code: &str, kind: CouponKind, value: i64) -> Coupon {
        Coupon {
            code: code.to_string(),
            kind,
            value: Decimal::new(value, 0),
            active: true,
            expires_at: None,
        }
    }

    fn catalog() -> Vec<Coupon> {
        vec![
            coupon("SAVE10", CouponKind::Percentage, 10),
            coupon("RENT20", CouponKind::FixedValue, 5000),
            coupon("FLAT200", CouponKind::FixedValue, 200),
        ]
    }

    #[test]
    fn test_percentage_discount() {
        let result = CouponService::apply_coupon(
            "SAVE10",
            Decimal::new(3600, 0),
            Decimal::ZERO,
            &catalog(),
        )
        .unwrap();
        assert_eq!(result.discount_amount, Decimal::new(360, 0));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let result = CouponService::apply_coupon(
            "save10",
            Decimal::new(3600, 0),
            Decimal::ZERO,
            &catalog(),
        )
        .unwrap();
        assert_eq!(result.applied_coupon.code, "SAVE10");
        assert_eq!(result.discount_amount, Decimal::new(360, 0));
    }

    #[test]
    fn test_fixed_discount_clamped_to_discountable_base() {
        // Cupón de 5000 contra base 3600: el descuento se recorta a 3600
        let result = CouponService::apply_coupon(
            "RENT20",
            Decimal::new(3600, 0),
            Decimal::ZERO,
            &catalog(),
        )
        .unwrap();
        assert_eq!(result.discount_amount, Decimal::new(3600, 0));
    }

    #[test]
    fn test_clamp_includes_delivery_charge() {
        let result = CouponService::apply_coupon(
            "RENT20",
            Decimal::new(3600, 0),
            Decimal::new(100, 0),
            &catalog(),
        )
        .unwrap();
        assert_eq!(result.discount_amount, Decimal::new(3700, 0));
    }

    #[test]
    fn test_percentage_over_hundred_still_clamped() {
        let catalog = vec![coupon("MEGA", CouponKind::Percentage, 150)];
        let result =
            CouponService::apply_coupon("MEGA", Decimal::new(1000, 0), Decimal::ZERO, &catalog)
                .unwrap();
        assert_eq!(result.discount_amount, Decimal::new(1000, 0));
    }

    #[test]
    fn test_negative_value_floors_at_zero() {
        let mut bad = coupon("NEG", CouponKind::FixedValue, 0);
        bad.value = Decimal::new(-500, 0);
        let result =
            CouponService::apply_coupon("NEG", Decimal::new(1000, 0), Decimal::ZERO, &[bad])
                .unwrap();
        assert_eq!(result.discount_amount, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_code() {
        let err = CouponService::apply_coupon(
            "NOPE",
            Decimal::new(1000, 0),
            Decimal::ZERO,
            &catalog(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::CouponNotFound(_)));
    }

    #[test]
    fn test_expired_coupon() {
        let mut expired = coupon("OLD", CouponKind::Percentage, 10);
        expired.expires_at = Some(Utc::now() - Duration::days(1));
        let err =
            CouponService::apply_coupon("OLD", Decimal::new(1000, 0), Decimal::ZERO, &[expired])
                .unwrap_err();
        assert!(matches!(err, AppError::CouponExpired(_)));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let first = CouponService::apply_coupon(
            "SAVE10",
            Decimal::new(3600, 0),
            Decimal::ZERO,
            &catalog(),
        )
        .unwrap();
        let second = CouponService::apply_coupon(
            "SAVE10",
            Decimal::new(3600, 0),
            Decimal::ZERO,
            &catalog(),
        )
        .unwrap();
        assert_eq!(first.discount_amount, second.discount_amount);
    }
}
