//! Mock Email Service Implementation
//!
//! A mock implementation of the email service for development and testing.
//! Messages are printed to the console instead of being delivered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::InfrastructureError;

use super::email_service::{mask_email, EmailService};

/// Mock email service for development and testing
///
/// This implementation:
/// - Prints messages to the console
/// - Generates mock message ids
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        if self.simulate_failure {
            warn!(
                to = %mask_email(to),
                "Mock email service simulating failure"
            );
            return Err(InfrastructureError::Email(
                "Simulated email delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!();
            println!("========================================");
            println!("  MOCK EMAIL #{} TO: {}", count, to);
            println!("  SUBJECT: {}", subject);
            println!("{}", body);
            println!("========================================");
            println!();
        }

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(to),
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_success() {
        let service = MockEmailService::with_options(false, false);
        let result = service
            .send_email("user@example.com", "Hi", "body")
            .await
            .unwrap();

        assert!(result.starts_with("mock_"));
        assert_eq!(service.message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_simulated_failure() {
        let service = MockEmailService::with_options(false, true);
        let result = service.send_email("user@example.com", "Hi", "body").await;

        assert!(result.is_err());
        assert!(!service.is_available().await);
        assert_eq!(service.message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_verification_code_default_wording() {
        let service = MockEmailService::with_options(false, false);
        let result = service
            .send_verification_code("user@example.com", "482913")
            .await;

        assert!(result.is_ok());
        assert_eq!(service.message_count(), 1);
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(MockEmailService::new().provider_name(), "Mock");
    }
}
