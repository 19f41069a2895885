use chrono::Utc;

use crate::domain::entities::pickup::{PickupRequest, PickupStatus};
use crate::errors::{DomainError, ValidationError};

fn pending_pickup() -> PickupRequest {
    let now = Utc::now();
    PickupRequest {
        id: 7,
        user_id: Some(1),
        name: "Asha Verma".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        waste_category: "plastic".to_string(),
        weight: Some(4.5),
        address: "12 Canal Road".to_string(),
        latitude: None,
        longitude: None,
        scheduled_date: "2026-09-01".to_string(),
        status: PickupStatus::Pending,
        admin_notes: None,
        collector_notes: None,
        carbon_credits_earned: 0,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_status_parse() {
    assert_eq!(PickupStatus::parse("APPROVED").unwrap(), PickupStatus::Approved);
    assert_eq!(PickupStatus::parse("completed").unwrap(), PickupStatus::Completed);
    assert_eq!(PickupStatus::parse("Pending").unwrap(), PickupStatus::Pending);

    let err = PickupStatus::parse("SHIPPED").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidStatus { status } if status == "SHIPPED"));
}

#[test]
fn test_status_round_trip() {
    for status in [
        PickupStatus::Pending,
        PickupStatus::Approved,
        PickupStatus::Rejected,
        PickupStatus::Completed,
    ] {
        assert_eq!(PickupStatus::parse(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_approve_attaches_admin_notes() {
    let mut pickup = pending_pickup();

    pickup
        .apply_transition(PickupStatus::Approved, Some("ok".to_string()))
        .unwrap();

    assert_eq!(pickup.status, PickupStatus::Approved);
    assert_eq!(pickup.admin_notes.as_deref(), Some("ok"));
    assert!(pickup.collector_notes.is_none());
}

#[test]
fn test_complete_attaches_collector_notes() {
    let mut pickup = pending_pickup();

    pickup
        .apply_transition(PickupStatus::Completed, Some("collected 4kg".to_string()))
        .unwrap();

    assert_eq!(pickup.status, PickupStatus::Completed);
    assert_eq!(pickup.collector_notes.as_deref(), Some("collected 4kg"));
    assert!(pickup.admin_notes.is_none());
}

#[test]
fn test_blank_notes_are_ignored() {
    let mut pickup = pending_pickup();

    pickup
        .apply_transition(PickupStatus::Rejected, Some("   ".to_string()))
        .unwrap();

    assert_eq!(pickup.status, PickupStatus::Rejected);
    assert!(pickup.admin_notes.is_none());
}

#[test]
fn test_transition_to_pending_is_invalid() {
    let mut pickup = pending_pickup();
    pickup.status = PickupStatus::Approved;

    let err = pickup
        .apply_transition(PickupStatus::Pending, None)
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::InvalidStatus { .. })
    ));
    // The pickup is untouched on an invalid transition
    assert_eq!(pickup.status, PickupStatus::Approved);
}

#[test]
fn test_camel_case_wire_format() {
    let pickup = pending_pickup();
    let json = serde_json::to_value(&pickup).unwrap();

    assert_eq!(json["wasteCategory"], "plastic");
    assert_eq!(json["scheduledDate"], "2026-09-01");
    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["carbonCreditsEarned"], 0);
}
