//! Types for verification service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::verification_record::VerificationRecord;

/// Result of issuing a verification code
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// The verification record that was stored
    pub record: VerificationRecord,

    /// Message id reported by the email provider
    pub message_id: String,

    /// When the user may request another code
    pub next_resend_at: DateTime<Utc>,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Id of the consumed record
    pub record_id: Uuid,

    /// Address whose ownership was proven
    pub email: String,

    /// When the record was consumed
    pub verified_at: DateTime<Utc>,
}
