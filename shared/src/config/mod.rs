//! Configuration module with business-specific sub-modules
//!
//! Configuration is loaded from environment variables (with `.env` support in
//! the binaries). Each sub-module owns one logical area:
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection
//! - `otp` - OTP issuance and verification policy
//! - `server` - HTTP server configuration

pub mod database;
pub mod environment;
pub mod otp;
pub mod server;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use otp::OtpSettings;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// OTP policy configuration
    pub otp: OtpSettings,

    /// Database configuration; `None` selects the in-memory repositories
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            otp: OtpSettings::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }
}
