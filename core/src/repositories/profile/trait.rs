//! Profile repository trait - the identity-store boundary.
//!
//! The identity store owns accounts and profiles; the only write this
//! subsystem ever performs against it is the single false → true flip of
//! the email-verified flag.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Repository trait for the identity-store verified flag
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Mark the user's email as verified.
    ///
    /// Called only after the matching verification record has been durably
    /// consumed.
    ///
    /// # Returns
    /// * `Ok(())` - Flag updated
    /// * `Err(DomainError)` - Profile missing or update failed
    async fn mark_email_verified(&self, user_id: &str) -> Result<(), DomainError>;
}
