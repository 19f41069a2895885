//! Unit tests for the verification gate

use crate::services::otp::gate::VerificationGate;

#[test]
fn test_unverified_by_default() {
    let gate = VerificationGate::new();
    assert!(!gate.is_verified("a@x.com"));
}

#[test]
fn test_mark_then_is_verified() {
    let gate = VerificationGate::new();
    gate.mark_verified("a@x.com");
    assert!(gate.is_verified("a@x.com"));
}

#[test]
fn test_consume_clears_and_reports() {
    let gate = VerificationGate::new();
    gate.mark_verified("a@x.com");

    assert!(gate.consume("a@x.com"));
    assert!(!gate.is_verified("a@x.com"));

    // A second consume finds nothing
    assert!(!gate.consume("a@x.com"));
}

#[test]
fn test_clear_is_idempotent() {
    let gate = VerificationGate::new();
    gate.mark_verified("a@x.com");

    gate.clear("a@x.com");
    gate.clear("a@x.com");
    assert!(!gate.is_verified("a@x.com"));
}

#[test]
fn test_emails_are_independent() {
    let gate = VerificationGate::new();
    gate.mark_verified("a@x.com");
    gate.mark_verified("b@y.com");

    gate.consume("a@x.com");

    assert!(!gate.is_verified("a@x.com"));
    assert!(gate.is_verified("b@y.com"));
}
