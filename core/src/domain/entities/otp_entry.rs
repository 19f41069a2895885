//! One-time passcode entry for email verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of an issued code (2 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 2;

/// A single outstanding verification code for an email address.
///
/// The store keeps at most one of these per email; issuing again replaces
/// the entry and invalidates the previous secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Email address the code was issued for
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Number of failed verification attempts against this code
    pub attempts: u32,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Creates a new entry with a cryptographically secure random code
    /// expiring `ttl` from now.
    pub fn new(email: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            email,
            code: Self::generate_code(),
            attempts: 0,
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Generates a uniformly random fixed-width numeric code using the
    /// OS-provided CSPRNG.
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let mut bytes = [0u8; 4];
        rng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes);
        // Modulo bias over a 6-digit range is negligible.
        format!("{:06}", num % 1_000_000)
    }

    /// Whether the code is past its expiry timestamp
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Constant-time comparison of the stored secret against a candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        self.code.len() == candidate.len()
            && constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Time remaining until expiration, zero if already expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
