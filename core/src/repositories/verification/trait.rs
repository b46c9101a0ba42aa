//! Verification record repository trait defining the record-store interface.
//!
//! The record store is the only coupling point between code issuance and
//! code verification. Implementations must keep the "most recent pending"
//! ordering stable: creation time first, insertion sequence as tie-break,
//! since two records can share a timestamp at sub-second resolution.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

/// Repository trait for verification record persistence
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Persist a new verification record.
    ///
    /// One row per issuance, never an upsert; older pending records for the
    /// same user are left in place and become unreachable through
    /// [`find_latest_pending`](Self::find_latest_pending).
    ///
    /// # Returns
    /// * `Ok(VerificationRecord)` - The stored record
    /// * `Err(DomainError)` - Insert failed
    async fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, DomainError>;

    /// Find the most recently created record for the user that has not been
    /// consumed (`verified_at` unset).
    ///
    /// # Returns
    /// * `Ok(Some(VerificationRecord))` - The latest pending record
    /// * `Ok(None)` - No pending record exists for this user
    /// * `Err(DomainError)` - Lookup failed
    async fn find_latest_pending(
        &self,
        user_id: &str,
    ) -> Result<Option<VerificationRecord>, DomainError>;

    /// Set `verified_at` on the record with the given id, but only if it is
    /// still pending.
    ///
    /// This is the serialization point for concurrent verification: the
    /// update must be conditional on `verified_at` being unset so that
    /// exactly one of two racing callers wins.
    ///
    /// # Returns
    /// * `Ok(true)` - This call performed the pending → verified transition
    /// * `Ok(false)` - The record was missing or already consumed
    /// * `Err(DomainError)` - Update failed
    async fn mark_verified(
        &self,
        id: Uuid,
        verified_at: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
