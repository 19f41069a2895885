//! OTP policy configuration

use serde::{Deserialize, Serialize};

/// Default lifetime of an issued verification code, in minutes
pub const DEFAULT_OTP_TTL_MINUTES: i64 = 2;

/// Default interval between expired-entry sweeps, in seconds
pub const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 300;

/// OTP issuance and verification policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpSettings {
    /// Minutes before an issued code expires
    pub ttl_minutes: i64,

    /// Maximum wrong-code attempts before the entry is invalidated.
    /// `None` allows unlimited retries against a live code.
    pub max_attempts: Option<u32>,

    /// Whether to return the raw code in the issuance response.
    /// Debug/test facility only; must never be enabled in production.
    pub expose_code_in_response: bool,

    /// How often the background sweeper removes expired entries, in seconds.
    /// Zero disables the sweeper.
    pub sweep_interval_seconds: u64,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_OTP_TTL_MINUTES,
            max_attempts: None,
            expose_code_in_response: false,
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL_SECONDS,
        }
    }
}

impl OtpSettings {
    /// Load the OTP policy from `OTP_TTL_MINUTES`, `OTP_MAX_ATTEMPTS`,
    /// `OTP_EXPOSE_CODE` and `OTP_SWEEP_INTERVAL_SECONDS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_minutes: std::env::var("OTP_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_minutes),
            max_attempts: std::env::var("OTP_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok()),
            expose_code_in_response: std::env::var("OTP_EXPOSE_CODE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.expose_code_in_response),
            sweep_interval_seconds: std::env::var("OTP_SWEEP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let settings = OtpSettings::default();
        assert_eq!(settings.ttl_minutes, DEFAULT_OTP_TTL_MINUTES);
        assert_eq!(settings.max_attempts, None);
        assert!(!settings.expose_code_in_response);
    }
}
