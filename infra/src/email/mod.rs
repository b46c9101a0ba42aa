//! Email Service Module
//!
//! This module provides email service implementations for sending
//! verification codes. It includes an SMTP transport for production and a
//! mock implementation for development and tests.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all providers
//! - **Mock Implementation**: Logs messages instead of sending
//! - **SMTP Support**: Production delivery via lettre
//! - **Security**: Email addresses are masked in logs

pub mod adapter;
pub mod email_service;
pub mod mock_email;

// SMTP email service (feature-gated)
#[cfg(feature = "smtp-email")]
pub mod smtp;

// Re-export commonly used types
pub use adapter::EmailSenderAdapter;
pub use email_service::{verification_email_body, EmailService, VERIFICATION_SUBJECT};
pub use mock_email::MockEmailService;

#[cfg(feature = "smtp-email")]
pub use smtp::{SmtpConfig, SmtpEmailService};


use crate::InfrastructureError;

/// Create an email service based on configuration.
///
/// Returns the provider named in the configuration, falling back to the
/// mock implementation for unknown providers.
pub fn create_email_service(
    config: &ic_shared::config::EmailConfig,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => Ok(Box::new(MockEmailService::new())),
        #[cfg(feature = "smtp-email")]
        "smtp" => {
            let smtp_config = SmtpConfig::from_email_config(config);
            Ok(Box::new(SmtpEmailService::new(smtp_config)?))
        }
        other => {
            tracing::warn!(
                provider = other,
                "Unknown email provider, using mock implementation"
            );
            Ok(Box::new(MockEmailService::new()))
        }
    }
}
