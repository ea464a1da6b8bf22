//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: precios,
//! cupones, checkout, ciclo de vida del viaje y autenticación por OTP.
//! Los servicios encapsulan operaciones que pueden involucrar múltiples
//! modelos o integraciones externas.

pub mod checkout_service;
pub mod coupon_service;
pub mod otp_service;
pub mod pricing_service;
pub mod trip_service;

pub use checkout_service::*;
pub use coupon_service::*;
pub use pricing_service::*;
