//! Cliente del gateway de SMS
//!
//! Solo se usa para relay de códigos OTP hacia el teléfono del cliente.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::utils::errors::AppError;

#[async_trait]
pub trait SmsClient: Send + Sync {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<(), AppError>;
}

/// Implementación HTTP contra el gateway de SMS
pub struct HttpSmsClient {
    gateway_url: String,
    client: Client,
}

impl HttpSmsClient {
    pub fn new(gateway_url: String, client: Client) -> Self {
        Self { gateway_url, client }
    }
}

#[async_trait]
impl SmsClient for HttpSmsClient {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<(), AppError> {
        log::info!("📱 Enviando OTP a {}", phone);

        let response = self
            .client
            .post(&self.gateway_url)
            .json(&json!({
                "to": phone,
                "message": format!("Your rental booking verification code is {}", code),
            }))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("SMS gateway request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "SMS gateway error {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
