//! Input types for the pickup submission workflow

use chrono::Utc;

use crate::domain::entities::pickup::{PickupRequest, PickupStatus};

/// A pickup submission as received from the client, prior to validation.
///
/// String fields arrive as-is; the workflow checks presence in a fixed order
/// so the first missing field is the one reported.
#[derive(Debug, Clone, Default)]
pub struct PickupSubmission {
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub waste_category: String,
    pub weight: Option<f64>,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub scheduled_date: String,
}

impl From<PickupSubmission> for PickupRequest {
    fn from(submission: PickupSubmission) -> Self {
        let now = Utc::now();
        PickupRequest {
            id: 0,
            user_id: submission.user_id,
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            waste_category: submission.waste_category,
            weight: submission.weight,
            address: submission.address,
            latitude: submission.latitude,
            longitude: submission.longitude,
            scheduled_date: submission.scheduled_date,
            status: PickupStatus::Pending,
            admin_notes: None,
            collector_notes: None,
            carbon_credits_earned: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
