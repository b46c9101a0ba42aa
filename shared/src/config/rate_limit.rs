//! Rate limiting configuration

use serde::{Deserialize, Serialize};

/// Rate limiting for verification code issuance.
///
/// The web client shows a matching countdown, but the client is untrusted;
/// this is the server-side guard.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Minimum seconds between code requests for the same user (0 disables)
    #[serde(default = "default_resend_cooldown_seconds")]
    pub resend_cooldown_seconds: i64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            resend_cooldown_seconds: default_resend_cooldown_seconds(),
        }
    }
}

fn default_resend_cooldown_seconds() -> i64 {
    60
}
