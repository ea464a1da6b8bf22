//! Modelos del dominio
//!
//! Este módulo contiene los modelos de datos del dominio de alquiler:
//! catálogo (vehículos, paquetes), cupones, reservas y pedidos.

pub mod booking;
pub mod coupon;
pub mod order;
pub mod package;
pub mod vehicle;
