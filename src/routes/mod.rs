//! Rutas de la API
//!
//! Cada submódulo expone un `create_*_router()` que se monta bajo
//! /api en main.

pub mod auth_routes;
pub mod booking_routes;
pub mod catalog_routes;
pub mod checkout_routes;
