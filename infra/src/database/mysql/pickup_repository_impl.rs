//! MySQL implementation of the PickupRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sr_core::domain::entities::pickup::{PickupRequest, PickupStatus};
use sr_core::errors::DomainError;
use sr_core::repositories::PickupRepository;

/// MySQL implementation of PickupRepository
pub struct MySqlPickupRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlPickupRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a PickupRequest entity
    fn row_to_pickup(row: &sqlx::mysql::MySqlRow) -> Result<PickupRequest, DomainError> {
        let status_str: String = row.try_get("status").map_err(|e| DomainError::Database {
            message: format!("Failed to get status: {}", e),
        })?;
        let status = PickupStatus::parse(&status_str).map_err(|_| DomainError::Database {
            message: format!("Unknown status in database: {}", status_str),
        })?;

        Ok(PickupRequest {
            id: row.try_get("id").map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get user_id: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Database {
                message: format!("Failed to get phone: {}", e),
            })?,
            waste_category: row
                .try_get("waste_category")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get waste_category: {}", e),
                })?,
            weight: row.try_get("weight").map_err(|e| DomainError::Database {
                message: format!("Failed to get weight: {}", e),
            })?,
            address: row.try_get("address").map_err(|e| DomainError::Database {
                message: format!("Failed to get address: {}", e),
            })?,
            latitude: row.try_get("latitude").map_err(|e| DomainError::Database {
                message: format!("Failed to get latitude: {}", e),
            })?,
            longitude: row.try_get("longitude").map_err(|e| DomainError::Database {
                message: format!("Failed to get longitude: {}", e),
            })?,
            scheduled_date: row
                .try_get("scheduled_date")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get scheduled_date: {}", e),
                })?,
            status,
            admin_notes: row
                .try_get("admin_notes")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get admin_notes: {}", e),
                })?,
            collector_notes: row
                .try_get("collector_notes")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get collector_notes: {}", e),
                })?,
            carbon_credits_earned: row
                .try_get("carbon_credits_earned")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get carbon_credits_earned: {}", e),
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

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, name, email, phone, waste_category, weight,
           address, latitude, longitude, scheduled_date, status,
           admin_notes, collector_notes, carbon_credits_earned,
           created_at, updated_at
    FROM pickups
"#;

#[async_trait]
impl PickupRepository for MySqlPickupRepository {
    async fn create(&self, mut pickup: PickupRequest) -> Result<PickupRequest, DomainError> {
        let query = r#"
            INSERT INTO pickups
                (user_id, name, email, phone, waste_category, weight,
                 address, latitude, longitude, scheduled_date, status,
                 admin_notes, collector_notes, carbon_credits_earned,
                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(pickup.user_id)
            .bind(&pickup.name)
            .bind(&pickup.email)
            .bind(&pickup.phone)
            .bind(&pickup.waste_category)
            .bind(pickup.weight)
            .bind(&pickup.address)
            .bind(pickup.latitude)
            .bind(pickup.longitude)
            .bind(&pickup.scheduled_date)
            .bind(pickup.status.as_str())
            .bind(&pickup.admin_notes)
            .bind(&pickup.collector_notes)
            .bind(pickup.carbon_credits_earned)
            .bind(pickup.created_at)
            .bind(pickup.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to insert pickup: {}", e),
            })?;

        pickup.id = result.last_insert_id() as i64;
        Ok(pickup)
    }

    async fn update(&self, pickup: PickupRequest) -> Result<PickupRequest, DomainError> {
        let query = r#"
            UPDATE pickups
            SET status = ?, admin_notes = ?, collector_notes = ?,
                carbon_credits_earned = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(pickup.status.as_str())
            .bind(&pickup.admin_notes)
            .bind(&pickup.collector_notes)
            .bind(pickup.carbon_credits_earned)
            .bind(pickup.updated_at)
            .bind(pickup.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update pickup: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("pickup request {}", pickup.id),
            });
        }
        Ok(pickup)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PickupRequest>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_pickup(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<PickupRequest>, DomainError> {
        let query = format!("{} ORDER BY id", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_pickup).collect()
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<PickupRequest>, DomainError> {
        let query = format!("{} WHERE email = ? ORDER BY id", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_pickup).collect()
    }
}
