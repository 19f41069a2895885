//! Adapter bridging the infrastructure email service to the core notifier
//! trait.
//!
//! The core OTP service is generic over `NotifierTrait`; this adapter lets
//! the binary choose between SMTP and mock delivery at runtime behind a
//! single concrete type.

use std::sync::Arc;

use async_trait::async_trait;

use sr_core::services::otp::NotifierTrait;

use super::email_service::EmailService;

/// `NotifierTrait` implementation backed by any `EmailService`
pub struct EmailNotifierAdapter {
    service: Arc<dyn EmailService>,
}

impl EmailNotifierAdapter {
    pub fn new(service: Arc<dyn EmailService>) -> Self {
        Self { service }
    }

    pub fn provider_name(&self) -> &str {
        self.service.provider_name()
    }
}

#[async_trait]
impl NotifierTrait for EmailNotifierAdapter {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.service
            .send_verification_code(email, code)
            .await
            .map_err(|e| e.to_string())
    }
}
