use std::collections::HashSet;
use std::thread;
use std::time::Duration as StdDuration;

use chrono::Duration;

use crate::domain::entities::otp_entry::{OtpEntry, CODE_LENGTH, DEFAULT_TTL_MINUTES};

#[test]
fn test_new_entry() {
    let entry = OtpEntry::new("user@example.com".to_string(), Duration::minutes(DEFAULT_TTL_MINUTES));

    assert_eq!(entry.email, "user@example.com");
    assert_eq!(entry.code.len(), CODE_LENGTH);
    assert_eq!(entry.attempts, 0);
    assert!(!entry.is_expired());
}

#[test]
fn test_generated_code_format() {
    for _ in 0..100 {
        let code = OtpEntry::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));

        let num: u32 = code.parse().expect("generated code should be numeric");
        assert!(num < 1_000_000);
    }
}

#[test]
fn test_code_uniqueness() {
    let codes: Vec<String> = (0..100).map(|_| OtpEntry::generate_code()).collect();

    // Extremely unlikely that a CSPRNG produces 100 identical codes
    let unique_count = codes.iter().collect::<HashSet<_>>().len();
    assert!(unique_count > 1);
}

#[test]
fn test_matches_is_exact() {
    let entry = OtpEntry::new("user@example.com".to_string(), Duration::minutes(2));

    assert!(entry.matches(&entry.code));
    assert!(!entry.matches("000000"));
    assert!(!entry.matches(""));
    assert!(!entry.matches(&format!("{}0", entry.code)));
}

#[test]
fn test_expiry() {
    let entry = OtpEntry::new("user@example.com".to_string(), Duration::zero());

    thread::sleep(StdDuration::from_millis(10));

    assert!(entry.is_expired());
    assert_eq!(entry.time_until_expiration(), Duration::zero());
}

#[test]
fn test_time_until_expiration() {
    let entry = OtpEntry::new("user@example.com".to_string(), Duration::minutes(2));

    let remaining = entry.time_until_expiration();
    assert!(remaining <= Duration::minutes(2));
    assert!(remaining > Duration::minutes(1));
}
