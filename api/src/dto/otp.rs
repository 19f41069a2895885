use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for POST /api/otp/send and POST /api/otp/clear
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Query parameters for POST /api/otp/verify
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpQuery {
    pub email: String,
    pub otp: String,
}

/// Response body for POST /api/otp/send
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    /// Notifier message id
    pub message_id: String,

    /// When the issued code expires
    pub expires_at: DateTime<Utc>,

    /// Raw code; present only when the debug exposure flag is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Response body for GET /api/otp/status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpStatusResponse {
    pub email: String,
    pub verified: bool,
    pub has_otp: bool,
}
