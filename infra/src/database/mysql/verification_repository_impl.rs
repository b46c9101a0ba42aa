//! MySQL implementation of the VerificationRepository trait.
//!
//! Backed by the `email_verifications` table:
//!
//! ```sql
//! CREATE TABLE email_verifications (
//!     seq         BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
//!     id          CHAR(36)     NOT NULL UNIQUE,
//!     user_id     VARCHAR(64)  NOT NULL,
//!     email       VARCHAR(255) NOT NULL,
//!     otp_code    CHAR(6)      NOT NULL,
//!     created_at  DATETIME(6)  NOT NULL,
//!     expires_at  DATETIME(6)  NOT NULL,
//!     verified_at DATETIME(6)  NULL,
//!     KEY idx_user_pending (user_id, verified_at, created_at)
//! );
//! ```
//!
//! The AUTO_INCREMENT `seq` column breaks creation-time ties so the
//! "most recent pending" lookup stays stable under rapid issuance.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ic_core::domain::entities::verification_record::VerificationRecord;
use ic_core::errors::DomainError;
use ic_core::repositories::VerificationRepository;

/// MySQL implementation of VerificationRepository
pub struct MySqlVerificationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    /// Create a new MySQL verification record repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a VerificationRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<VerificationRecord, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Store {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(VerificationRecord {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Store {
                message: format!("Invalid UUID in record store: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(|e| DomainError::Store {
                message: format!("Failed to get user_id: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Store {
                message: format!("Failed to get email: {}", e),
            })?,
            code: row.try_get("otp_code").map_err(|e| DomainError::Store {
                message: format!("Failed to get otp_code: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            verified_at: row
                .try_get::<Option<DateTime<Utc>>, _>("verified_at")
                .map_err(|e| DomainError::Store {
                    message: format!("Failed to get verified_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError> {
        let query = r#"
            INSERT INTO email_verifications (
                id, user_id, email, otp_code,
                created_at, expires_at, verified_at
            ) VALUES (?, ?, ?, ?, ?, ?, NULL)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.user_id)
            .bind(&record.email)
            .bind(&record.code)
            .bind(record.created_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    record_id = %record.id,
                    error = %e,
                    "Failed to insert verification record"
                );
                DomainError::Store {
                    message: format!("Failed to store verification record: {}", e),
                }
            })?;

        Ok(record)
    }

    async fn find_latest_pending(
        &self,
        user_id: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let query = r#"
            SELECT id, user_id, email, otp_code,
                   created_at, expires_at, verified_at
            FROM email_verifications
            WHERE user_id = ? AND verified_at IS NULL
            ORDER BY created_at DESC, seq DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "Failed to query pending verification");
                DomainError::Store {
                    message: format!("Failed to query verification records: {}", e),
                }
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_verified(
        &self,
        id: Uuid,
        verified_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        // Conditional on verified_at being unset: exactly one of two
        // concurrent callers observes rows_affected == 1.
        let query = r#"
            UPDATE email_verifications
            SET verified_at = ?
            WHERE id = ? AND verified_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(verified_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(record_id = %id, error = %e, "Failed to mark record verified");
                DomainError::Store {
                    message: format!("Failed to update verification record: {}", e),
                }
            })?;

        Ok(result.rows_affected() == 1)
    }
}
