use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/verification/send-code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendCodeRequest {
    /// Account the code is bound to; opaque to this service
    #[validate(length(min = 1))]
    pub user_id: String,

    /// Institutional email address to verify
    #[validate(length(min = 1))]
    pub email: String,
}

/// Request body for POST /api/v1/verification/verify-code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    /// Account the code was issued for
    #[validate(length(min = 1))]
    pub user_id: String,

    /// 6-digit code from the verification email
    #[validate(length(equal = 6))]
    pub otp: String,
}

/// Success envelope returned by both verification endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub success: bool,
    pub message: String,
}

impl VerificationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Error envelope: `{ "error": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
