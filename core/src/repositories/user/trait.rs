//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, assigning their id.
    ///
    /// Fails with `AlreadyExists` when the email is taken; the email is a
    /// unique key.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
