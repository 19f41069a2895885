//! Mapping of domain errors to HTTP responses.
//!
//! Every domain error is recovered here into the structured failure
//! envelope; none escape as a crash. Mismatched and expired verification
//! codes render the same message, so a caller cannot tell which occurred.

use actix_web::HttpResponse;

use sr_core::errors::{DomainError, OtpError};
use sr_shared::types::ApiResponse;

/// Shared wording for the mismatch and expiry cases
const INVALID_OR_EXPIRED: &str = "Invalid or expired verification code";

/// Convert a domain error into a `{success: false, message}` response with
/// the matching HTTP status.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::ValidationErr(e) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string()))
        }
        DomainError::Otp(OtpError::Mismatch) | DomainError::Otp(OtpError::Expired) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(INVALID_OR_EXPIRED))
        }
        DomainError::Otp(OtpError::NotVerified) => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(
                "Please verify your email with an OTP before submitting a pickup request",
            ))
        }
        DomainError::Otp(OtpError::DeliveryFailed) => HttpResponse::ServiceUnavailable().json(
            ApiResponse::<()>::error("Failed to deliver verification code. Please try again later"),
        ),
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string()))
        }
        DomainError::AlreadyExists { .. } => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(error.to_string()))
        }
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            log::error!("Internal error: {}", error);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}
