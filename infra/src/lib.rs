//! # Infrastructure Layer
//!
//! Concrete implementations of the ScrapRoute backend's external
//! collaborators:
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: delivery of verification codes (SMTP via lettre, mock for
//!   development)

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email delivery module
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
