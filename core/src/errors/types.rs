//! Error type definitions for the verification workflow.
//!
//! Display strings double as the user-facing messages surfaced by the API
//! layer, so wording here is part of the wire contract.

use thiserror::Error;

/// Verification workflow errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Invalid email domain. Please use your IIT institutional email (@iit*.ac.in)")]
    InvalidEmailDomain { email: String },

    #[error("No pending verification found")]
    NoPendingVerification,

    #[error("Verification code has expired. Please request a new one.")]
    CodeExpired,

    #[error("Invalid verification code")]
    CodeMismatch,

    #[error("Please wait {seconds_remaining} seconds before requesting a new code")]
    ResendCooldown { seconds_remaining: i64 },
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },
}
