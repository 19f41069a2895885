//! Trait for the external notification collaborator

use async_trait::async_trait;

/// Delivery channel for verification codes (email provider, test double).
///
/// Implementations deliver the code and nothing else; they must not touch
/// OTP or gate state. Returns a provider message id on success.
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Deliver a verification code to an email address.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}
