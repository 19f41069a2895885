//! Pickup submission workflow service

use std::sync::Arc;

use tracing::{info, warn};

use sr_shared::utils::validation;

use crate::domain::entities::pickup::{PickupRequest, PickupStatus};
use crate::errors::{DomainError, DomainResult, OtpError, ValidationError};
use crate::repositories::PickupRepository;
use crate::services::otp::VerificationGate;

use super::types::PickupSubmission;

/// Coordinates the verification gate, field validation, and persistence for
/// pickup requests.
pub struct PickupService<P: PickupRepository> {
    repository: Arc<P>,
    gate: Arc<VerificationGate>,
}

impl<P: PickupRepository> PickupService<P> {
    pub fn new(repository: Arc<P>, gate: Arc<VerificationGate>) -> Self {
        Self { repository, gate }
    }

    /// Submit a new pickup request.
    ///
    /// The email must currently hold a verified flag; the flag is consumed
    /// only after the record is persisted, so a failed persist leaves the
    /// verification usable for a retry. A pickup is never persisted for an
    /// unverified email.
    pub async fn submit(&self, submission: PickupSubmission) -> DomainResult<PickupRequest> {
        if !self.gate.is_verified(&submission.email) {
            warn!(
                event = "pickup_rejected_unverified",
                "Pickup submission for unverified email"
            );
            return Err(OtpError::NotVerified.into());
        }

        Self::validate_fields(&submission)?;

        let email = submission.email.clone();
        let saved = self.repository.create(PickupRequest::from(submission)).await?;
        self.gate.consume(&email);

        info!(event = "pickup_created", id = saved.id, "Pickup request persisted");
        Ok(saved)
    }

    /// Presence checks in the order surfaced to users; the first missing
    /// field is the one reported.
    fn validate_fields(submission: &PickupSubmission) -> DomainResult<()> {
        let fields = [
            ("name", submission.name.as_str()),
            ("email", submission.email.as_str()),
            ("phone", submission.phone.as_str()),
            ("wasteCategory", submission.waste_category.as_str()),
            ("scheduledDate", submission.scheduled_date.as_str()),
            ("address", submission.address.as_str()),
        ];
        for (field, value) in fields {
            if !validation::not_blank(value) {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Administrative status transition with notes routing.
    pub async fn update_status(
        &self,
        id: i64,
        status: PickupStatus,
        notes: Option<String>,
    ) -> DomainResult<PickupRequest> {
        let mut pickup = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("pickup request {}", id),
            })?;

        pickup.apply_transition(status, notes)?;

        let updated = self.repository.update(pickup).await?;
        info!(
            event = "pickup_status_updated",
            id = id,
            status = %updated.status,
            "Pickup status updated"
        );
        Ok(updated)
    }

    pub async fn get(&self, id: i64) -> DomainResult<PickupRequest> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("pickup request {}", id),
            })
    }

    pub async fn list_all(&self) -> DomainResult<Vec<PickupRequest>> {
        self.repository.find_all().await
    }

    pub async fn list_by_email(&self, email: &str) -> DomainResult<Vec<PickupRequest>> {
        self.repository.find_by_email(email).await
    }
}
