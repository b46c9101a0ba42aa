//! Trait for the outbound email collaborator

use async_trait::async_trait;

/// Trait for email service integration.
///
/// Injected into the verification service so tests can substitute a fake
/// sender; the concrete SMTP client lives in the infrastructure layer.
#[async_trait]
pub trait EmailSenderTrait: Send + Sync {
    /// Send a verification code to the address. Returns a provider message
    /// id on success.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}
