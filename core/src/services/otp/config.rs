//! Configuration for the OTP services

use chrono::Duration;

use sr_shared::config::OtpSettings;

use crate::domain::entities::otp_entry::DEFAULT_TTL_MINUTES;

/// Configuration for OTP issuance and verification
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Minutes before an issued code expires
    pub ttl_minutes: i64,

    /// Maximum wrong-code attempts before the entry is invalidated.
    /// `None` allows unlimited retries against a live code.
    pub max_attempts: Option<u32>,

    /// Whether `request_otp` returns the raw code in its result.
    /// Debug/test opt-in only; defaults to off.
    pub expose_code_in_response: bool,
}

impl OtpConfig {
    /// Lifetime of an issued code
    pub fn ttl(&self) -> Duration {
        Duration::minutes(self.ttl_minutes)
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_TTL_MINUTES,
            max_attempts: None,
            expose_code_in_response: false,
        }
    }
}

impl From<&OtpSettings> for OtpConfig {
    fn from(settings: &OtpSettings) -> Self {
        Self {
            ttl_minutes: settings.ttl_minutes,
            max_attempts: settings.max_attempts,
            expose_code_in_response: settings.expose_code_in_response,
        }
    }
}
