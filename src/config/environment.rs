//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y las URLs
//! de los colaboradores externos (catálogo, bookings, pagos, SMS).

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    // URLs de colaboradores externos
    pub catalog_base_url: String,
    pub booking_base_url: String,
    pub payment_base_url: String,
    pub sms_gateway_url: String,
    // Credenciales del gateway de pagos
    pub payment_key_id: String,
    pub payment_key_secret: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            port: env::var("PORT")
                .expect("PORT must be set")
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").expect("HOST must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .expect("JWT_EXPIRATION must be set")
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .expect("CORS_ORIGINS must be set")
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            // URLs de colaboradores externos
            catalog_base_url: env::var("CATALOG_BASE_URL").expect("CATALOG_BASE_URL must be set"),
            booking_base_url: env::var("BOOKING_BASE_URL").expect("BOOKING_BASE_URL must be set"),
            payment_base_url: env::var("PAYMENT_BASE_URL").expect("PAYMENT_BASE_URL must be set"),
            sms_gateway_url: env::var("SMS_GATEWAY_URL").expect("SMS_GATEWAY_URL must be set"),
            payment_key_id: env::var("PAYMENT_KEY_ID").expect("PAYMENT_KEY_ID must be set"),
            payment_key_secret: env::var("PAYMENT_KEY_SECRET")
                .expect("PAYMENT_KEY_SECRET must be set"),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
