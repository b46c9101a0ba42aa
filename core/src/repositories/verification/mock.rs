//! In-memory implementation of VerificationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

use super::trait_::VerificationRepository;

/// Mock verification record store for testing.
///
/// Records are kept in insertion order, which provides the tie-break for
/// same-timestamp lookups.
pub struct MockVerificationRepository {
    records: Arc<RwLock<Vec<VerificationRecord>>>,
}

impl MockVerificationRepository {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All records ever inserted, in insertion order (test helper)
    pub async fn all_records(&self) -> Vec<VerificationRecord> {
        self.records.read().await.clone()
    }

    /// Number of records still pending for a user (test helper)
    pub async fn pending_count(&self, user_id: &str) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id && r.is_pending())
            .count()
    }
}

impl Default for MockVerificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(record)
    }

    async fn find_latest_pending(
        &self,
        user_id: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let records = self.records.read().await;

        // Latest by (created_at, insertion index); max_by_key keeps the
        // last of equal keys, so later inserts win timestamp ties.
        Ok(records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.user_id == user_id && r.is_pending())
            .max_by_key(|(idx, r)| (r.created_at, *idx))
            .map(|(_, r)| r.clone()))
    }

    async fn mark_verified(
        &self,
        id: Uuid,
        verified_at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        match records.iter_mut().find(|r| r.id == id) {
            Some(record) if record.is_pending() => {
                record.mark_verified(verified_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
