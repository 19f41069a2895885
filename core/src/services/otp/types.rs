//! Types for OTP service results

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of issuing and delivering a verification code
#[derive(Debug, Clone)]
pub struct SendOtpResult {
    /// Message id reported by the notifier
    pub message_id: String,

    /// When the issued code stops being valid
    pub expires_at: DateTime<Utc>,

    /// The raw code; present only when `expose_code_in_response` is enabled
    pub debug_code: Option<String>,
}

/// Verification state snapshot for an email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OtpStatus {
    /// Whether the email has passed verification and not yet consumed it
    pub verified: bool,

    /// Whether a live (non-expired) code is outstanding
    pub has_otp: bool,
}
