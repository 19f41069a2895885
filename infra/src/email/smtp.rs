//! SMTP-based email delivery for production

use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials, Message,
    SmtpTransport, Transport,
};
use tracing::info;
use uuid::Uuid;

use crate::InfrastructureError;

use super::email_service::{mask_email, EmailService};

/// Configuration for SMTP email delivery
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server host (e.g. "smtp.resend.com")
    pub host: String,
    /// SMTP server port (typically 465 for TLS)
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password (or API key)
    pub password: String,
    /// From email address
    pub from_email: String,
    /// From display name (optional)
    pub from_name: Option<String>,
}

impl SmtpConfig {
    /// Create config from environment variables.
    ///
    /// Required: `SMTP_HOST`, `SMTP_USERNAME`, `SMTP_PASSWORD`,
    /// `SMTP_FROM_EMAIL`. Optional: `SMTP_PORT` (default 465),
    /// `SMTP_FROM_NAME`. Returns `None` when any required variable is
    /// missing, which selects the mock sender.
    pub fn from_env() -> Option<Self> {
        fn get_env(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.is_empty())
        }

        Some(Self {
            host: get_env("SMTP_HOST")?,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(465),
            username: get_env("SMTP_USERNAME")?,
            password: get_env("SMTP_PASSWORD")?,
            from_email: get_env("SMTP_FROM_EMAIL")?,
            from_name: get_env("SMTP_FROM_NAME"),
        })
    }

    fn from_mailbox(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{} <{}>", name, self.from_email),
            None => self.from_email.clone(),
        }
    }
}

/// SMTP email sender for production use
pub struct SmtpEmailService {
    transport: SmtpTransport,
    from: String,
}

impl SmtpEmailService {
    /// Build the SMTP transport from configuration.
    pub fn new(config: SmtpConfig) -> Result<Self, InfrastructureError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| InfrastructureError::Config(format!("Invalid SMTP relay: {}", e)))?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from: config.from_mailbox(),
        })
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let message = Message::builder()
            .from(self
                .from
                .parse()
                .map_err(|e| InfrastructureError::Config(format!("Invalid from address: {}", e)))?)
            .to(to
                .parse()
                .map_err(|e| InfrastructureError::Email(format!("Invalid recipient: {}", e)))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Email(format!("Failed to build message: {}", e)))?;

        self.transport
            .send(&message)
            .map_err(|e| InfrastructureError::Email(format!("SMTP send failed: {}", e)))?;

        let message_id = format!("smtp_{}", Uuid::new_v4());
        info!(
            target: "email_service",
            provider = "smtp",
            to = %mask_email(to),
            message_id = %message_id,
            "Email sent successfully"
        );
        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}
