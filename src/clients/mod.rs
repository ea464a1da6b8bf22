//! Clientes de colaboradores externos
//!
//! Este módulo contiene los seams hacia los servicios que este core
//! consume pero no implementa: catálogo, directorio de cupones, servicio
//! de bookings, gateway de pagos y gateway de SMS. Cada uno es un trait
//! con una implementación HTTP; los tests inyectan mocks.

pub mod booking_client;
pub mod catalog_client;
pub mod coupon_client;
pub mod payment_client;
pub mod sms_client;

pub use booking_client::{BookingClient, BookingSession, NewBookingRecord, PaymentProof};
pub use catalog_client::CatalogClient;
pub use coupon_client::CouponClient;
pub use payment_client::{PaymentClient, PaymentOutcome};
pub use sms_client::SmsClient;
