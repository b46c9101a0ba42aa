//! Verification record entity for email ownership verification.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 10;

/// One issued verification code bound to a user and email address.
///
/// A record is created per issuance and never updated except for the single
/// transition that sets `verified_at`. Older pending records for the same
/// user are superseded by newer ones, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Opaque reference to the owning account; the identity store is
    /// authoritative for the account itself
    pub user_id: String,

    /// The address the code was sent to
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires; fixed at issuance
    pub expires_at: DateTime<Utc>,

    /// When the code was consumed. `None` means pending; once set the
    /// record is terminal.
    pub verified_at: Option<DateTime<Utc>>,
}

impl VerificationRecord {
    /// Creates a new pending record with a random 6-digit code and the
    /// default 10-minute expiry.
    pub fn new(user_id: String, email: String) -> Self {
        Self::new_with_expiration(user_id, email, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new pending record with a custom expiration time.
    pub fn new_with_expiration(user_id: String, email: String, expiration_minutes: i64) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            email,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            verified_at: None,
        }
    }

    /// Generates a random 6-digit code, uniform in `[100000, 999999]`.
    ///
    /// Uses the OS CSPRNG so codes are not guessable from the issuance
    /// timestamp.
    fn generate_code() -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(100_000..=999_999);
        format!("{:06}", code)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the record has not been consumed yet
    pub fn is_pending(&self) -> bool {
        self.verified_at.is_none()
    }

    /// Checks if the code can still be consumed (pending and not expired)
    pub fn is_consumable(&self) -> bool {
        self.is_pending() && !self.is_expired()
    }

    /// Compares a submitted code against this record's code.
    ///
    /// Exact string equality, evaluated in constant time.
    pub fn matches(&self, submitted_code: &str) -> bool {
        self.code.len() == submitted_code.len()
            && constant_time_eq::constant_time_eq(self.code.as_bytes(), submitted_code.as_bytes())
    }

    /// Marks the record consumed. Terminal; must only be applied once.
    pub fn mark_verified(&mut self, verified_at: DateTime<Utc>) {
        self.verified_at = Some(verified_at);
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> VerificationRecord {
        VerificationRecord::new("user-1".to_string(), "rohan@iitb.ac.in".to_string())
    }

    #[test]
    fn test_new_verification_record() {
        let rec = record();

        assert_eq!(rec.user_id, "user-1");
        assert_eq!(rec.email, "rohan@iitb.ac.in");
        assert_eq!(rec.code.len(), CODE_LENGTH);
        assert!(rec.is_pending());
        assert!(!rec.is_expired());
        assert!(rec.is_consumable());
        assert_eq!(
            rec.expires_at,
            rec.created_at + Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
        );
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let rec = record();
            assert_eq!(rec.code.len(), CODE_LENGTH);
            assert!(rec.code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = rec.code.parse().expect("code should be numeric");
            assert!((100_000..=999_999).contains(&num));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| record().code).collect();

        let unique_count = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique_count > 1);
    }

    #[test]
    fn test_matches_exact_code() {
        let rec = record();
        let code = rec.code.clone();

        assert!(rec.matches(&code));
        assert!(!rec.matches("000000"));
        assert!(!rec.matches(&code[..5]));
        assert!(!rec.matches(&format!("{}0", code)));
    }

    #[test]
    fn test_mark_verified_is_terminal() {
        let mut rec = record();
        assert!(rec.is_pending());

        let at = Utc::now();
        rec.mark_verified(at);

        assert!(!rec.is_pending());
        assert!(!rec.is_consumable());
        assert_eq!(rec.verified_at, Some(at));
    }

    #[test]
    fn test_zero_minute_expiration() {
        let rec = VerificationRecord::new_with_expiration(
            "user-1".to_string(),
            "rohan@iitb.ac.in".to_string(),
            0,
        );

        std::thread::sleep(std::time::Duration::from_millis(10));

        assert!(rec.is_expired());
        assert!(rec.is_pending()); // expired but never consumed
        assert!(!rec.is_consumable());
        assert_eq!(rec.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_custom_expiration() {
        let rec = VerificationRecord::new_with_expiration(
            "user-1".to_string(),
            "rohan@iitb.ac.in".to_string(),
            30,
        );

        assert_eq!(rec.expires_at, rec.created_at + Duration::minutes(30));
    }

    #[test]
    fn test_serialization() {
        let rec = record();

        let json = serde_json::to_string(&rec).unwrap();
        let deserialized: VerificationRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(rec, deserialized);
    }
}
