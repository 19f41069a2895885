//! OTP issuance and verification service

use std::sync::Arc;

use tracing::{error, info, warn};

use sr_shared::utils::validation;

use crate::domain::entities::otp_entry::CODE_LENGTH;
use crate::errors::{DomainResult, OtpError, ValidationError};

use super::config::OtpConfig;
use super::gate::VerificationGate;
use super::store::{OtpCheckOutcome, OtpStore};
use super::traits::NotifierTrait;
use super::types::{OtpStatus, SendOtpResult};

/// Issues verification codes, delegates delivery to the notifier, and checks
/// submitted candidates against the store.
pub struct OtpService<N: NotifierTrait> {
    /// Notifier for delivering codes
    notifier: Arc<N>,
    /// Store of outstanding codes
    store: Arc<OtpStore>,
    /// Per-email verified flags
    gate: Arc<VerificationGate>,
    /// Service configuration
    config: OtpConfig,
}

impl<N: NotifierTrait> OtpService<N> {
    pub fn new(
        notifier: Arc<N>,
        store: Arc<OtpStore>,
        gate: Arc<VerificationGate>,
        config: OtpConfig,
    ) -> Self {
        Self {
            notifier,
            store,
            gate,
            config,
        }
    }

    /// Issue a fresh code for an email and hand it to the notifier.
    ///
    /// The store write completes before the notifier call, and no store lock
    /// spans the call. When delivery fails the freshly issued entry is rolled
    /// back so an undelivered secret never stays valid, and `DeliveryFailed`
    /// is surfaced to the caller.
    pub async fn request_otp(&self, email: &str) -> DomainResult<SendOtpResult> {
        if !validation::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let entry = self.store.issue(email);
        info!(
            event = "otp_issued",
            expires_at = %entry.expires_at,
            "Issued verification code"
        );

        match self.notifier.send_verification_code(email, &entry.code).await {
            Ok(message_id) => Ok(SendOtpResult {
                message_id,
                expires_at: entry.expires_at,
                debug_code: self
                    .config
                    .expose_code_in_response
                    .then(|| entry.code.clone()),
            }),
            Err(err) => {
                // remove_if_code: a concurrent re-issue must not be clobbered
                self.store.remove_if_code(email, &entry.code);
                error!(
                    event = "otp_delivery_failed",
                    error = %err,
                    "Rolled back undelivered verification code"
                );
                Err(OtpError::DeliveryFailed.into())
            }
        }
    }

    /// Check a candidate code. Success flips the verification flag and
    /// consumes the stored entry; a mismatch leaves the entry intact for a
    /// retry.
    pub fn verify_otp(&self, email: &str, candidate: &str) -> DomainResult<()> {
        if candidate.len() != CODE_LENGTH || !candidate.chars().all(|c| c.is_ascii_digit()) {
            warn!(event = "otp_bad_format", "Malformed verification code submitted");
            return Err(OtpError::Mismatch.into());
        }

        match self.store.check(email, candidate) {
            OtpCheckOutcome::Matched => {
                self.gate.mark_verified(email);
                info!(event = "otp_verified", "Verification succeeded");
                Ok(())
            }
            OtpCheckOutcome::Mismatch { remaining_attempts } => {
                warn!(
                    event = "otp_mismatch",
                    remaining = ?remaining_attempts,
                    "Verification code mismatch"
                );
                Err(OtpError::Mismatch.into())
            }
            OtpCheckOutcome::Expired | OtpCheckOutcome::Missing => {
                warn!(event = "otp_expired", "No live verification code for email");
                Err(OtpError::Expired.into())
            }
        }
    }

    /// Verification state snapshot for status reporting.
    pub fn status(&self, email: &str) -> OtpStatus {
        OtpStatus {
            verified: self.gate.is_verified(email),
            has_otp: self.store.contains(email),
        }
    }

    /// Administrative reset of both the outstanding code and the verified
    /// flag. Idempotent.
    pub fn clear(&self, email: &str) {
        self.store.remove(email);
        self.gate.clear(email);
        info!(event = "otp_cleared", "Cleared verification state");
    }
}
