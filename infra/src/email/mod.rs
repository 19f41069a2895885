//! Email Delivery Module
//!
//! Implementations of the outbound email collaborator used to deliver OTP
//! verification codes:
//!
//! - **EmailService trait**: common interface for all providers
//! - **Mock implementation**: console output for development and tests
//! - **SMTP support**: production delivery via lettre
//! - **Security**: email addresses are masked in logs

pub mod email_service;
pub mod mock_email;
pub mod notifier_adapter;
pub mod smtp;

// Re-export commonly used types
pub use email_service::{mask_email, EmailService};
pub use mock_email::MockEmailService;
pub use notifier_adapter::EmailNotifierAdapter;
pub use smtp::{SmtpConfig, SmtpEmailService};
