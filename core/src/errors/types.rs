//! Error type definitions for OTP verification and input validation.
//!
//! These enums carry the machine-readable error kind; user-facing wording is
//! decided at the request boundary.

use thiserror::Error;

/// OTP and verification-gate errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Verification code expired or not found")]
    Expired,

    #[error("Invalid verification code")]
    Mismatch,

    #[error("Email is not verified")]
    NotVerified,

    #[error("Failed to deliver verification code")]
    DeliveryFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_message_names_the_field() {
        let error = ValidationError::RequiredField {
            field: "phone".to_string(),
        };
        assert_eq!(error.to_string(), "Required field: phone");
    }

    #[test]
    fn test_invalid_status_message() {
        let error = ValidationError::InvalidStatus {
            status: "SHIPPED".to_string(),
        };
        assert!(error.to_string().contains("SHIPPED"));
    }
}
