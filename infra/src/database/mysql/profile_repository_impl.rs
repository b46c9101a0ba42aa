//! MySQL implementation of the ProfileRepository trait.
//!
//! The `profiles` table is owned by the identity side of the application;
//! this repository performs the one write the verification subsystem is
//! allowed: flipping `is_email_verified` to true.

use async_trait::async_trait;
use sqlx::MySqlPool;

use ic_core::errors::DomainError;
use ic_core::repositories::ProfileRepository;

/// MySQL implementation of ProfileRepository
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    /// Create a new MySQL profile repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn mark_email_verified(&self, user_id: &str) -> Result<(), DomainError> {
        let query = r#"
            UPDATE profiles
            SET is_email_verified = TRUE
            WHERE user_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "Failed to update profile verified flag");
                DomainError::Store {
                    message: format!("Failed to update profile: {}", e),
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Profile".to_string(),
            });
        }

        Ok(())
    }
}
