//! Email Service Interface
//!
//! Defines the trait for email delivery implementations that send OTP
//! verification codes and other transactional mail.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Email delivery trait
///
/// Implementations include:
/// - SMTP (lettre) for production
/// - Mock implementation for development and tests
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email.
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a verification code with the application's standard wording.
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        let subject = "ScrapRoute verification code";
        let body = format!(
            "Dear user,\n\nYour ScrapRoute verification code is: {}\n\n\
             This code expires shortly after it is issued. If you didn't \
             request it, please ignore this email.\n\nThank you,\nScrapRoute Team",
            code
        );
        self.send_email(to, subject, &body).await
    }

    /// Name of the delivery provider (e.g. "SMTP", "Mock")
    fn provider_name(&self) -> &str;

    /// Health check; default implementation always reports available.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Mask an email address for logging.
///
/// Keeps the first character of the local part and the domain:
/// `asha@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("asha@example.com"), "a***@example.com");
        assert_eq!(mask_email("x@y.org"), "x***@y.org");
    }

    #[test]
    fn test_mask_email_degenerate_inputs() {
        assert_eq!(mask_email("no-at-sign"), "***");
        assert_eq!(mask_email("@example.com"), "***");
        assert_eq!(mask_email(""), "***");
    }
}
