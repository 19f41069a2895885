//! Unit tests for the OTP service

use std::sync::Arc;

use crate::errors::{DomainError, OtpError, ValidationError};
use crate::services::otp::config::OtpConfig;
use crate::services::otp::gate::VerificationGate;
use crate::services::otp::service::OtpService;
use crate::services::otp::store::OtpStore;

use super::mocks::MockNotifier;

struct Fixture {
    service: OtpService<MockNotifier>,
    notifier: Arc<MockNotifier>,
    store: Arc<OtpStore>,
    gate: Arc<VerificationGate>,
}

fn fixture(notifier_fails: bool, config: OtpConfig) -> Fixture {
    let notifier = Arc::new(MockNotifier::new(notifier_fails));
    let store = Arc::new(OtpStore::new(&config));
    let gate = Arc::new(VerificationGate::new());
    let service = OtpService::new(
        Arc::clone(&notifier),
        Arc::clone(&store),
        Arc::clone(&gate),
        config,
    );
    Fixture {
        service,
        notifier,
        store,
        gate,
    }
}

#[tokio::test]
async fn test_request_otp_stores_and_delivers() {
    let f = fixture(false, OtpConfig::default());

    let result = f.service.request_otp("user@example.com").await.unwrap();

    assert_eq!(result.message_id, "mock-msg-1");
    assert!(f.store.contains("user@example.com"));
    assert!(f.notifier.sent_code("user@example.com").is_some());

    // The raw code is not leaked by default
    assert!(result.debug_code.is_none());
}

#[tokio::test]
async fn test_request_otp_rejects_invalid_email() {
    let f = fixture(false, OtpConfig::default());

    let err = f.service.request_otp("not-an-email").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidEmail)
    ));
    assert_eq!(f.notifier.sent_count(), 0);
}

#[tokio::test]
async fn test_delivery_failure_rolls_back_entry() {
    let f = fixture(true, OtpConfig::default());

    let err = f.service.request_otp("user@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::DeliveryFailed)));

    // No undelivered secret remains valid
    assert!(!f.store.contains("user@example.com"));
}

#[tokio::test]
async fn test_expose_code_is_an_explicit_opt_in() {
    let config = OtpConfig {
        expose_code_in_response: true,
        ..OtpConfig::default()
    };
    let f = fixture(false, config);

    let result = f.service.request_otp("user@example.com").await.unwrap();
    assert_eq!(result.debug_code, f.notifier.sent_code("user@example.com"));
}

#[tokio::test]
async fn test_verify_flow() {
    let f = fixture(false, OtpConfig::default());

    f.service.request_otp("a@x.com").await.unwrap();
    let code = f.notifier.sent_code("a@x.com").unwrap();

    // Wrong code: rejected, entry retained, gate closed
    let err = f.service.verify_otp("a@x.com", "000000").unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Mismatch)));
    let status = f.service.status("a@x.com");
    assert!(!status.verified);
    assert!(status.has_otp);

    // Correct code: verified, entry consumed
    f.service.verify_otp("a@x.com", &code).unwrap();
    let status = f.service.status("a@x.com");
    assert!(status.verified);
    assert!(!status.has_otp);

    // The consumed code cannot be replayed
    let err = f.service.verify_otp("a@x.com", &code).unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Expired)));
    assert!(f.gate.is_verified("a@x.com"), "replay must not clear the flag");
}

#[tokio::test]
async fn test_malformed_candidate_rejected_without_store_access() {
    let f = fixture(false, OtpConfig::default());
    f.service.request_otp("a@x.com").await.unwrap();

    for bad in ["", "123", "12ab56", "1234567"] {
        let err = f.service.verify_otp("a@x.com", bad).unwrap_err();
        assert!(matches!(err, DomainError::Otp(OtpError::Mismatch)));
    }

    // Malformed input never consumed the entry
    assert!(f.store.contains("a@x.com"));
}

#[tokio::test]
async fn test_verify_without_issue_reports_expired() {
    let f = fixture(false, OtpConfig::default());
    let err = f.service.verify_otp("ghost@x.com", "123456").unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Expired)));
}

#[tokio::test]
async fn test_clear_resets_code_and_flag() {
    let f = fixture(false, OtpConfig::default());

    f.service.request_otp("a@x.com").await.unwrap();
    let code = f.notifier.sent_code("a@x.com").unwrap();
    f.service.verify_otp("a@x.com", &code).unwrap();
    f.service.request_otp("a@x.com").await.unwrap();

    f.service.clear("a@x.com");

    let status = f.service.status("a@x.com");
    assert!(!status.verified);
    assert!(!status.has_otp);
}
