//! Carbon credit wallet entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user ledger of carbon credits and cash balance.
///
/// At most one wallet exists per user; the repository enforces the unique
/// key. Created lazily on first access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonWallet {
    pub id: i64,

    /// Owning user (unique)
    pub user_id: i64,

    pub total_credits: i32,
    pub cash_balance: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CarbonWallet {
    /// Creates an empty wallet for a user; `id` is assigned by the repository.
    pub fn new(user_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            total_credits: 0,
            cash_balance: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
