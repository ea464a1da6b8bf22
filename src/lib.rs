//! Backend de booking para alquiler de motos
//!
//! Selección de paquete por duración, motor de precios, cupones,
//! máquina de estados de la reserva y orquestación del checkout contra
//! colaboradores externos (catálogo, bookings, pagos, SMS).

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
