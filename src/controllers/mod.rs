//! Controllers de la API
//!
//! Orquestan request → validación → servicio → response DTO.

pub mod auth_controller;
pub mod booking_controller;
pub mod catalog_controller;
pub mod checkout_controller;
