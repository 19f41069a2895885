//! Pickup request entity and its status lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, ValidationError};

/// Lifecycle status of a pickup request.
///
/// Transitions out of `Pending` are administrator/collector-driven; clients
/// never change status themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PickupStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl PickupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickupStatus::Pending => "PENDING",
            PickupStatus::Approved => "APPROVED",
            PickupStatus::Rejected => "REJECTED",
            PickupStatus::Completed => "COMPLETED",
        }
    }

    /// Parse a status string (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(PickupStatus::Pending),
            "APPROVED" => Ok(PickupStatus::Approved),
            "REJECTED" => Ok(PickupStatus::Rejected),
            "COMPLETED" => Ok(PickupStatus::Completed),
            _ => Err(ValidationError::InvalidStatus {
                status: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scrap pickup request.
///
/// Created only for OTP-verified emails; `id` is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupRequest {
    pub id: i64,

    /// Owning user, when the request was submitted by a registered user
    pub user_id: Option<i64>,

    /// Contact fields captured from the submission form
    pub name: String,
    pub email: String,
    pub phone: String,

    /// Category of recyclable waste (plastic, metal, e-waste, ...)
    pub waste_category: String,

    /// Estimated weight in kilograms
    pub weight: Option<f64>,

    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Requested pickup date as supplied by the client
    pub scheduled_date: String,

    pub status: PickupStatus,

    /// Notes attached on APPROVED / REJECTED transitions
    pub admin_notes: Option<String>,

    /// Notes attached on the COMPLETED transition
    pub collector_notes: Option<String>,

    pub carbon_credits_earned: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PickupRequest {
    /// Apply an administrative status transition.
    ///
    /// Only APPROVED, REJECTED and COMPLETED are valid targets. Notes are
    /// routed to `admin_notes` for APPROVED/REJECTED and to `collector_notes`
    /// for COMPLETED; blank notes are ignored.
    pub fn apply_transition(
        &mut self,
        status: PickupStatus,
        notes: Option<String>,
    ) -> Result<(), DomainError> {
        let notes = notes.filter(|n| !n.trim().is_empty());
        match status {
            PickupStatus::Pending => {
                return Err(ValidationError::InvalidStatus {
                    status: status.to_string(),
                }
                .into());
            }
            PickupStatus::Approved | PickupStatus::Rejected => {
                if let Some(notes) = notes {
                    self.admin_notes = Some(notes);
                }
            }
            PickupStatus::Completed => {
                if let Some(notes) = notes {
                    self.collector_notes = Some(notes);
                }
            }
        }
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }
}
