//! In-memory user repository for development and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// User repository backed by a process-local map keyed by lowercased email
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let key = user.email.to_lowercase();
        let mut users = self.users.write().unwrap();
        if users.contains_key(&key) {
            return Err(DomainError::AlreadyExists {
                resource: format!("user with email {}", user.email),
            });
        }
        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        users.insert(key, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().unwrap().get(&email.to_lowercase()).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .values()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self
            .users
            .read()
            .unwrap()
            .contains_key(&email.to_lowercase()))
    }
}
