//! User registration

use std::sync::Arc;

use bcrypt::{hash, DEFAULT_COST};
use tracing::info;

use sr_shared::utils::validation;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Registers users. Login and sessions are out of scope for this backend;
/// registration exists because wallets and pickups reference user ids.
pub struct UserService<U: UserRepository> {
    repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Register a new user. Duplicate emails are rejected with
    /// `AlreadyExists`; the password is stored as a bcrypt hash.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<User> {
        if !validation::not_blank(name) {
            return Err(ValidationError::RequiredField {
                field: "name".to_string(),
            }
            .into());
        }
        if !validation::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !validation::not_blank(password) {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        if self.repository.exists_by_email(email).await? {
            return Err(DomainError::AlreadyExists {
                resource: format!("user with email {}", email),
            });
        }

        let password_hash = hash(password, DEFAULT_COST).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })?;

        let user = self
            .repository
            .create(User::new(name.to_string(), email.to_string(), password_hash))
            .await?;
        info!(event = "user_registered", id = user.id, "Registered new user");
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.repository.find_by_email(email).await
    }

    pub async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        self.repository.find_by_id(id).await
    }
}
