use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tracing::info;

use rental_booking::clients::booking_client::HttpBookingClient;
use rental_booking::clients::catalog_client::HttpCatalogClient;
use rental_booking::clients::coupon_client::HttpCouponClient;
use rental_booking::clients::payment_client::HttpPaymentClient;
use rental_booking::clients::sms_client::HttpSmsClient;
use rental_booking::config::environment::EnvironmentConfig;
use rental_booking::middleware::auth_middleware::auth_middleware;
use rental_booking::middleware::cors::cors_middleware;
use rental_booking::routes;
use rental_booking::services::otp_service::OtpService;
use rental_booking::state::AppState;
use rental_booking::utils::jwt::JwtConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🛵 Rental Booking - backend de alquiler de motos");
    info!("================================================");

    let config = EnvironmentConfig::default();
    let http_client = reqwest::Client::new();

    // Clientes de colaboradores externos
    let catalog = Arc::new(HttpCatalogClient::new(
        config.catalog_base_url.clone(),
        http_client.clone(),
    ));
    let coupons = Arc::new(HttpCouponClient::new(
        config.catalog_base_url.clone(),
        http_client.clone(),
    ));
    let bookings = Arc::new(HttpBookingClient::new(
        config.booking_base_url.clone(),
        http_client.clone(),
    ));
    let payments = Arc::new(HttpPaymentClient::new(
        config.payment_base_url.clone(),
        config.payment_key_id.clone(),
        config.payment_key_secret.clone(),
        http_client.clone(),
    ));
    let sms = Arc::new(HttpSmsClient::new(
        config.sms_gateway_url.clone(),
        http_client,
    ));

    let otp = Arc::new(OtpService::new(sms, JwtConfig::from(&config)));

    let app_state = AppState::new(config.clone(), catalog, coupons, bookings, payments, otp);

    // Rutas protegidas: exigen el token de sesión emitido tras el OTP
    let protected = Router::new()
        .nest("/api/checkout", routes::checkout_routes::create_checkout_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/catalog", routes::catalog_routes::create_catalog_router())
        .merge(protected)
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Auth:");
    info!("   POST /api/auth/otp/request - Pedir código OTP");
    info!("   POST /api/auth/otp/verify - Verificar código y emitir token");
    info!("📦 Catálogo:");
    info!("   GET  /api/catalog/categories/:id/packages - Paquetes por categoría");
    info!("   GET  /api/catalog/vehicles/:id - Vehículo");
    info!("🛒 Checkout:");
    info!("   POST /api/checkout/draft - Crear borrador");
    info!("   GET  /api/checkout/draft/:id/quote - Cotizar");
    info!("   POST /api/checkout/draft/:id/coupon - Aplicar cupón");
    info!("   DELETE /api/checkout/draft/:id/coupon - Quitar cupón");
    info!("   POST /api/checkout/draft/:id/confirm - Confirmar y pagar");
    info!("🛵 Reservas:");
    info!("   GET  /api/booking/:id - Obtener reserva");
    info!("   POST /api/booking/:id/cancel - Cancelar");
    info!("   POST /api/booking/:id/start-trip - Iniciar viaje (4 fotos)");
    info!("   POST /api/booking/:id/end-trip - Terminar viaje (4 fotos)");
    info!("   POST /api/booking/:id/finalize - Cerrar reserva");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "rental-booking",
        "status": "healthy",
    }))
}
