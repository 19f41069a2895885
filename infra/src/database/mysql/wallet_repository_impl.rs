//! MySQL implementation of the WalletRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sr_core::domain::entities::wallet::CarbonWallet;
use sr_core::errors::DomainError;
use sr_core::repositories::WalletRepository;

/// MySQL implementation of WalletRepository
///
/// The `wallets` table carries a unique key on `user_id`; duplicate creation
/// surfaces as `AlreadyExists`.
pub struct MySqlWalletRepository {
    pool: MySqlPool,
}

impl MySqlWalletRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_wallet(row: &sqlx::mysql::MySqlRow) -> Result<CarbonWallet, DomainError> {
        Ok(CarbonWallet {
            id: row.try_get("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get user_id: {}", e),
            })?,
            total_credits: row
                .try_get("total_credits")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get total_credits: {}", e),
                })?,
            cash_balance: row
                .try_get("cash_balance")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get cash_balance: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl WalletRepository for MySqlWalletRepository {
    async fn create(&self, mut wallet: CarbonWallet) -> Result<CarbonWallet, DomainError> {
        let query = r#"
            INSERT INTO wallets
                (user_id, total_credits, cash_balance, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(wallet.user_id)
            .bind(wallet.total_credits)
            .bind(wallet.cash_balance)
            .bind(wallet.created_at)
            .bind(wallet.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                wallet.id = done.last_insert_id() as i64;
                Ok(wallet)
            }
            Err(e) => {
                if e.as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false)
                {
                    Err(DomainError::AlreadyExists {
                        resource: format!("wallet for user {}", wallet.user_id),
                    })
                } else {
                    Err(DomainError::Database {
                        message: format!("Failed to insert wallet: {}", e),
                    })
                }
            }
        }
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<CarbonWallet>, DomainError> {
        let query = r#"
            SELECT id, user_id, total_credits, cash_balance, created_at, updated_at
            FROM wallets
            WHERE user_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_wallet(&row)?)),
            None => Ok(None),
        }
    }
}
