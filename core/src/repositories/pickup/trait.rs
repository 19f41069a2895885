//! Pickup repository trait defining the interface for pickup persistence.

use async_trait::async_trait;

use crate::domain::entities::pickup::PickupRequest;
use crate::errors::DomainError;

/// Repository contract for pickup request persistence.
///
/// Implementations only handle storage; the submission workflow, the
/// verification gate, and status rules live in the service layer.
#[async_trait]
pub trait PickupRepository: Send + Sync {
    /// Persist a new pickup request, assigning its id.
    async fn create(&self, pickup: PickupRequest) -> Result<PickupRequest, DomainError>;

    /// Update an existing pickup request.
    ///
    /// Fails with `NotFound` when the id is unknown.
    async fn update(&self, pickup: PickupRequest) -> Result<PickupRequest, DomainError>;

    /// Find a pickup request by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<PickupRequest>, DomainError>;

    /// All pickup requests, oldest first.
    async fn find_all(&self) -> Result<Vec<PickupRequest>, DomainError>;

    /// All pickup requests submitted for an email, oldest first.
    async fn find_by_email(&self, email: &str) -> Result<Vec<PickupRequest>, DomainError>;
}
