//! Cliente del gateway de pagos
//!
//! El gateway es un checkout hosteado: acá solo se abre la sesión y se
//! espera el desenlace consultando su estado. Que el usuario cierre el
//! widget sin pagar no es un error: la sesión queda abandonada y la
//! reserva sigue pendiente.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::clients::booking_client::{BookingSession, PaymentProof};
use crate::utils::errors::AppError;

/// Desenlace de un intento de cobro
#[derive(Debug, Clone)]
pub enum PaymentOutcome {
    Completed(PaymentProof),
    /// El usuario cerró el widget sin completar el pago
    Dismissed,
    Failed(String),
}

#[async_trait]
pub trait PaymentClient: Send + Sync {
    async fn collect(&self, session: &BookingSession) -> Result<PaymentOutcome, AppError>;
}

/// Estado de la sesión según el gateway
#[derive(Debug, Deserialize)]
struct PaymentSessionStatus {
    status: String,
    payment_id: Option<String>,
    signature: Option<String>,
    error: Option<String>,
}

/// Implementación HTTP que sondea el estado de la sesión hosteada
pub struct HttpPaymentClient {
    base_url: String,
    key_id: String,
    key_secret: String,
    client: Client,
}

impl HttpPaymentClient {
    pub fn new(base_url: String, key_id: String, key_secret: String, client: Client) -> Self {
        Self {
            base_url,
            key_id,
            key_secret,
            client,
        }
    }
}

#[async_trait]
impl PaymentClient for HttpPaymentClient {
    async fn collect(&self, session: &BookingSession) -> Result<PaymentOutcome, AppError> {
        let url = format!(
            "{}/sessions/{}",
            self.base_url, session.payment_session_id
        );

        let mut attempts = 0;
        let max_attempts = 60; // ~5 minutos de espera por el checkout hosteado
        let delay = Duration::from_secs(5);

        loop {
            attempts += 1;
            log::info!(
                "⏳ Esperando desenlace del pago {} (intento {}/{})",
                session.payment_session_id,
                attempts,
                max_attempts
            );

            let response = self
                .client
                .get(&url)
                .basic_auth(&self.key_id, Some(&self.key_secret))
                .send()
                .await
                .map_err(|e| AppError::ExternalApi(format!("Payment gateway request failed: {}", e)))?;

            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            if !status.is_success() {
                return Err(AppError::ExternalApi(format!(
                    "Payment gateway error {}: {}",
                    status, text
                )));
            }

            let session_status: PaymentSessionStatus = serde_json::from_str(&text).map_err(|e| {
                AppError::ExternalApi(format!("Error parsing payment session status: {}", e))
            })?;

            match session_status.status.as_str() {
                "paid" => {
                    let proof = PaymentProof {
                        payment_id: session_status.payment_id.ok_or_else(|| {
                            AppError::ExternalApi("Paid session without payment_id".to_string())
                        })?,
                        signature: session_status.signature.ok_or_else(|| {
                            AppError::ExternalApi("Paid session without signature".to_string())
                        })?,
                    };
                    log::info!("✅ Pago completado: {}", proof.payment_id);
                    return Ok(PaymentOutcome::Completed(proof));
                }
                "abandoned" => {
                    log::warn!("🚪 Checkout cerrado sin completar el pago");
                    return Ok(PaymentOutcome::Dismissed);
                }
                "failed" => {
                    return Ok(PaymentOutcome::Failed(
                        session_status
                            .error
                            .unwrap_or_else(|| "Payment failed".to_string()),
                    ));
                }
                // "created" / "pending": el widget sigue abierto
                _ => {
                    if attempts >= max_attempts {
                        // Sin desenlace en todo el plazo: se trata como widget cerrado
                        return Ok(PaymentOutcome::Dismissed);
                    }
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
