//! Utilidades compartidas
//!
//! Este módulo contiene helpers de errores, JWT y validación
//! usados por el resto de la aplicación.

pub mod errors;
pub mod jwt;
pub mod validation;
