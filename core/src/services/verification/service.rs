//! Main verification service implementation

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing;

use ic_shared::utils::email::{is_institutional_email, mask_email};
use ic_shared::utils::validation::{is_numeric_code, not_empty};

use crate::domain::entities::verification_record::{VerificationRecord, CODE_LENGTH};
use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};
use crate::repositories::{ProfileRepository, VerificationRepository};

use super::config::VerificationServiceConfig;
use super::traits::EmailSenderTrait;
use super::types::{IssueCodeResult, VerifyCodeResult};

/// Verification service for issuing and checking email ownership codes.
///
/// Each call is stateless; all state lives in the record store, which is
/// the only coupling point between issuance and verification.
pub struct VerificationService<E, V, P>
where
    E: EmailSenderTrait,
    V: VerificationRepository,
    P: ProfileRepository,
{
    /// Email collaborator for dispatching codes
    email_sender: Arc<E>,
    /// Durable verification record store
    verification_repo: Arc<V>,
    /// Identity store holding the verified flag
    profile_repo: Arc<P>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<E, V, P> VerificationService<E, V, P>
where
    E: EmailSenderTrait,
    V: VerificationRepository,
    P: ProfileRepository,
{
    /// Create a new verification service
    pub fn new(
        email_sender: Arc<E>,
        verification_repo: Arc<V>,
        profile_repo: Arc<P>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            email_sender,
            verification_repo,
            profile_repo,
            config,
        }
    }

    /// Issue a verification code for a user's institutional email.
    ///
    /// This method:
    /// 1. Validates that both fields are present
    /// 2. Enforces the institutional-domain predicate
    /// 3. Applies the per-user re-send cooldown
    /// 4. Stores a fresh pending record (one row per request, no upsert)
    /// 5. Dispatches the code via the email collaborator
    ///
    /// Issuance only succeeds after both the insert and the dispatch
    /// succeed. If dispatch fails the stored record stays pending; it is
    /// harmless and becomes unreachable once a later issuance supersedes it.
    pub async fn issue_code(&self, user_id: &str, email: &str) -> DomainResult<IssueCodeResult> {
        if !not_empty(user_id) {
            return Err(ValidationError::RequiredField {
                field: "userId".to_string(),
            }
            .into());
        }
        if !not_empty(email) {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }

        // The client runs the same check, but the client is untrusted.
        if !is_institutional_email(email) {
            tracing::warn!(
                user_id,
                email = %mask_email(email),
                event = "invalid_email_domain",
                "Rejected verification request for non-institutional email"
            );
            return Err(VerificationError::InvalidEmailDomain {
                email: email.to_string(),
            }
            .into());
        }

        if self.config.resend_cooldown_seconds > 0 {
            if let Some(latest) = self.verification_repo.find_latest_pending(user_id).await? {
                let elapsed = Utc::now()
                    .signed_duration_since(latest.created_at)
                    .num_seconds();
                let remaining = self.config.resend_cooldown_seconds - elapsed;
                if remaining > 0 {
                    tracing::warn!(
                        user_id,
                        cooldown_remaining = remaining,
                        event = "resend_cooldown",
                        "Verification code re-issue attempted inside cooldown window"
                    );
                    return Err(VerificationError::ResendCooldown {
                        seconds_remaining: remaining,
                    }
                    .into());
                }
            }
        }

        let record = VerificationRecord::new_with_expiration(
            user_id.to_string(),
            email.to_string(),
            self.config.code_expiration_minutes,
        );

        tracing::info!(
            user_id,
            email = %mask_email(email),
            record_id = %record.id,
            event = "otp_generated",
            "Generated new verification code"
        );

        let record = self.verification_repo.insert(record).await?;

        let message_id = self
            .email_sender
            .send_verification_code(&record.email, &record.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    user_id,
                    email = %mask_email(email),
                    error = %e,
                    event = "otp_dispatch_failed",
                    "Failed to dispatch verification email"
                );
                DomainError::Dispatch {
                    message: format!("Failed to send verification email: {}", e),
                }
            })?;

        let next_resend_at =
            record.created_at + Duration::seconds(self.config.resend_cooldown_seconds);

        Ok(IssueCodeResult {
            record,
            message_id,
            next_resend_at,
        })
    }

    /// Verify a submitted code for a user.
    ///
    /// Verification always targets the most recently created pending record;
    /// a code from an older, superseded issuance will not match. The
    /// pending → verified transition is conditional at the store, so of two
    /// concurrent callers holding the same record exactly one succeeds and
    /// the other resolves to `NoPendingVerification`.
    ///
    /// Once the record is consumed the identity store's verified flag is
    /// flipped. If that downstream write fails, the failure is surfaced as
    /// `ProfileUpdate` even though the record stays consumed; a retry of
    /// `verify_code` then reports `NoPendingVerification`.
    pub async fn verify_code(&self, user_id: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        if !not_empty(user_id) {
            return Err(ValidationError::RequiredField {
                field: "userId".to_string(),
            }
            .into());
        }

        if !is_numeric_code(code, CODE_LENGTH) {
            tracing::warn!(
                user_id,
                code_length = code.len(),
                event = "invalid_code_format",
                "Submitted verification code has invalid format"
            );
            return Err(VerificationError::CodeMismatch.into());
        }

        let record = self
            .verification_repo
            .find_latest_pending(user_id)
            .await?
            .ok_or(VerificationError::NoPendingVerification)?;

        if record.is_expired() {
            tracing::warn!(
                user_id,
                record_id = %record.id,
                event = "otp_expired",
                "Verification code submitted after expiry"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if !record.matches(code) {
            tracing::warn!(
                user_id,
                record_id = %record.id,
                event = "otp_mismatch",
                "Submitted verification code does not match"
            );
            return Err(VerificationError::CodeMismatch.into());
        }

        let verified_at = Utc::now();

        // Conditional update by record id; a concurrent caller that lost the
        // race observes the record as already consumed.
        let consumed = self
            .verification_repo
            .mark_verified(record.id, verified_at)
            .await?;
        if !consumed {
            return Err(VerificationError::NoPendingVerification.into());
        }

        tracing::info!(
            user_id,
            record_id = %record.id,
            event = "otp_verified",
            "Verification code accepted"
        );

        self.profile_repo
            .mark_email_verified(user_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    user_id,
                    record_id = %record.id,
                    error = %e,
                    event = "profile_flag_update_failed",
                    "Record consumed but profile verified-flag update failed"
                );
                DomainError::ProfileUpdate {
                    message: format!("Failed to update profile verification status: {}", e),
                }
            })?;

        Ok(VerifyCodeResult {
            record_id: record.id,
            email: record.email,
            verified_at,
        })
    }
}
