//! In-memory pickup repository for development and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::pickup::PickupRequest;
use crate::errors::DomainError;

use super::r#trait::PickupRepository;

/// Pickup repository backed by a process-local map
pub struct InMemoryPickupRepository {
    pickups: RwLock<HashMap<i64, PickupRequest>>,
    next_id: AtomicI64,
}

impl InMemoryPickupRepository {
    pub fn new() -> Self {
        Self {
            pickups: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPickupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PickupRepository for InMemoryPickupRepository {
    async fn create(&self, mut pickup: PickupRequest) -> Result<PickupRequest, DomainError> {
        pickup.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.pickups
            .write()
            .unwrap()
            .insert(pickup.id, pickup.clone());
        Ok(pickup)
    }

    async fn update(&self, pickup: PickupRequest) -> Result<PickupRequest, DomainError> {
        let mut pickups = self.pickups.write().unwrap();
        if !pickups.contains_key(&pickup.id) {
            return Err(DomainError::NotFound {
                resource: format!("pickup request {}", pickup.id),
            });
        }
        pickups.insert(pickup.id, pickup.clone());
        Ok(pickup)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PickupRequest>, DomainError> {
        Ok(self.pickups.read().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<PickupRequest>, DomainError> {
        let mut all: Vec<PickupRequest> = self.pickups.read().unwrap().values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<PickupRequest>, DomainError> {
        let mut matching: Vec<PickupRequest> = self
            .pickups
            .read()
            .unwrap()
            .values()
            .filter(|p| p.email == email)
            .cloned()
            .collect();
        matching.sort_by_key(|p| p.id);
        Ok(matching)
    }
}
