//! Verification service module for email ownership verification
//!
//! This module provides the complete verification code workflow:
//! - Code generation and dispatch via the email collaborator
//! - Institutional-domain enforcement on the server side
//! - Re-send cooldown per user
//! - Verification against the most recently issued pending code
//! - Promotion of the identity store's verified flag on success

mod config;
mod service;
mod traits;
mod types;

pub mod mock;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::EmailSenderTrait;
pub use types::{IssueCodeResult, VerifyCodeResult};
