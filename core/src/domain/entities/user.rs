//! User entity for registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform role of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
    Collector,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
            UserRole::Collector => "COLLECTOR",
        }
    }

    /// Parse a role string, defaulting to `User` for unknown values.
    pub fn parse_or_default(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "ADMIN" => UserRole::Admin,
            "COLLECTOR" => UserRole::Collector,
            _ => UserRole::User,
        }
    }
}

/// A registered user. The password hash never leaves the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,

    /// Unique email address
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the default role; `id` is assigned by the
    /// repository.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            password_hash,
            role: UserRole::User,
            created_at: Utc::now(),
        }
    }
}
