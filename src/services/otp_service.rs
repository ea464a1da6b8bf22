//! Servicio de autenticación por OTP
//!
//! Genera códigos de 6 dígitos, los releva por el gateway de SMS y los
//! guarda en memoria con vencimiento e intentos acotados. Al verificar
//! se emite un token de sesión JWT.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clients::SmsClient;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

/// Vigencia del código OTP
const OTP_TTL_MINUTES: i64 = 5;
/// Intentos de verificación permitidos por código
const MAX_VERIFY_ATTEMPTS: u32 = 3;

/// Código OTP pendiente de verificación
#[derive(Clone, Debug)]
struct OtpEntry {
    code: String,
    expires_at: DateTime<Utc>,
    attempts: u32,
}

impl OtpEntry {
    fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

pub struct OtpService {
    sms: Arc<dyn SmsClient>,
    jwt_config: JwtConfig,
    pending: RwLock<HashMap<String, OtpEntry>>,
}

impl OtpService {
    pub fn new(sms: Arc<dyn SmsClient>, jwt_config: JwtConfig) -> Self {
        Self {
            sms,
            jwt_config,
            pending: RwLock::new(HashMap::new()),
        }
    }

    /// Generar un código y relevarlo por SMS. Pedir otro código para el
    /// mismo teléfono reemplaza al anterior.
    pub async fn request_otp(&self, phone: &str) -> Result<(), AppError> {
        if !crate::utils::validation::is_valid_phone(phone) {
            return Err(AppError::Validation {
                field: "phone".to_string(),
                reason: "Phone number must be a valid 10-digit number".to_string(),
            });
        }

        // Cada pedido barre los códigos vencidos de otros teléfonos
        self.cleanup_expired().await;

        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));

        self.sms.send_otp(phone, &code).await?;

        let entry = OtpEntry {
            code,
            expires_at: Utc::now() + Duration::minutes(OTP_TTL_MINUTES),
            attempts: 0,
        };
        self.pending.write().await.insert(phone.to_string(), entry);

        log::info!("📨 OTP enviado a {}", phone);
        Ok(())
    }

    /// Verificar el código y emitir el token de sesión
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<String, AppError> {
        let mut pending = self.pending.write().await;

        let entry = pending
            .get_mut(phone)
            .ok_or_else(|| AppError::Unauthorized("No pending code for this phone".to_string()))?;

        if entry.is_expired() {
            pending.remove(phone);
            return Err(AppError::Unauthorized("Code has expired".to_string()));
        }

        entry.attempts += 1;
        if entry.attempts > MAX_VERIFY_ATTEMPTS {
            pending.remove(phone);
            return Err(AppError::Unauthorized(
                "Too many attempts, request a new code".to_string(),
            ));
        }

        if entry.code != code.trim() {
            return Err(AppError::Unauthorized("Incorrect code".to_string()));
        }

        pending.remove(phone);
        log::info!("✅ OTP verificado para {}", phone);

        generate_token(phone, &self.jwt_config)
    }

    /// Limpiar códigos vencidos
    pub async fn cleanup_expired(&self) {
        self.pending.write().await.retain(|_, e| !e.is_expired());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Gateway de SMS de prueba que captura el último código enviado
    struct RecordingSms {
        last_code: Mutex<Option<String>>,
    }

    #[async_trait]
    impl SmsClient for RecordingSms {
        async fn send_otp(&self, _phone: &str, code: &str) -> Result<(), AppError> {
            *self.last_code.lock().unwrap() = Some(code.to_string());
            Ok(())
        }
    }

    fn service() -> (Arc<RecordingSms>, OtpService) {
        let sms = Arc::new(RecordingSms {
            last_code: Mutex::new(None),
        });
        let jwt = JwtConfig {
            secret: "test-secret".to_string(),
            expiration: 3600,
        };
        (sms.clone(), OtpService::new(sms, jwt))
    }

    #[tokio::test]
    async fn test_request_and_verify() {
        let (sms, service) = service();
        service.request_otp("9876543210").await.unwrap();
        let code = sms.last_code.lock().unwrap().clone().unwrap();

        let token = service.verify_otp("9876543210", &code).await.unwrap();
        assert!(!token.is_empty());

        // El código es de un solo uso
        assert!(service.verify_otp("9876543210", &code).await.is_err());
    }

    #[tokio::test]
    async fn test_wrong_code_bounded_attempts() {
        let (sms, service) = service();
        service.request_otp("9876543210").await.unwrap();
        let code = sms.last_code.lock().unwrap().clone().unwrap();
        let wrong = if code == "000000" { "111111" } else { "000000" };

        for _ in 0..MAX_VERIFY_ATTEMPTS {
            assert!(service.verify_otp("9876543210", wrong).await.is_err());
        }
        // Agotados los intentos, ni el código correcto sirve
        assert!(service.verify_otp("9876543210", &code).await.is_err());
    }

    #[tokio::test]
    async fn test_request_sweeps_expired_codes() {
        let (_, service) = service();
        service.pending.write().await.insert(
            "9999999999".to_string(),
            OtpEntry {
                code: "123456".to_string(),
                expires_at: Utc::now() - Duration::minutes(1),
                attempts: 0,
            },
        );

        service.request_otp("9876543210").await.unwrap();

        let pending = service.pending.read().await;
        assert!(!pending.contains_key("9999999999"));
        assert!(pending.contains_key("9876543210"));
    }

    #[tokio::test]
    async fn test_rejects_invalid_phone() {
        let (_, service) = service();
        assert!(service.request_otp("12345").await.is_err());
    }
}
