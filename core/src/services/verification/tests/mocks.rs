//! Failure-injecting collaborators for verification service tests.
//!
//! The happy-path mocks live in `repositories::{verification, profile}` and
//! `services::verification::mock`; these cover the dependency-failure paths.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;
use crate::repositories::{ProfileRepository, VerificationRepository};

/// Record store whose every operation fails
pub struct FailingVerificationRepository;

#[async_trait]
impl VerificationRepository for FailingVerificationRepository {
    async fn insert(&self, _record: VerificationRecord) -> Result<VerificationRecord, DomainError> {
        Err(DomainError::Store {
            message: "record store unavailable".to_string(),
        })
    }

    async fn find_latest_pending(
        &self,
        _user_id: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        Err(DomainError::Store {
            message: "record store unavailable".to_string(),
        })
    }

    async fn mark_verified(
        &self,
        _id: Uuid,
        _verified_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        Err(DomainError::Store {
            message: "record store unavailable".to_string(),
        })
    }
}

/// Identity store whose flag update always fails
pub struct FailingProfileRepository;

#[async_trait]
impl ProfileRepository for FailingProfileRepository {
    async fn mark_email_verified(&self, _user_id: &str) -> Result<(), DomainError> {
        Err(DomainError::Internal {
            message: "identity store unreachable".to_string(),
        })
    }
}
