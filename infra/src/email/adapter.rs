//! Adapter binding infrastructure email services to the core sender trait

use std::sync::Arc;

use async_trait::async_trait;

use ic_core::services::verification::EmailSenderTrait;

use super::email_service::EmailService;

/// Wraps any [`EmailService`] implementation as the core
/// [`EmailSenderTrait`] the verification service is generic over.
pub struct EmailSenderAdapter {
    inner: Arc<dyn EmailService>,
}

impl EmailSenderAdapter {
    /// Create a new adapter around an email service
    pub fn new(inner: Arc<dyn EmailService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EmailSenderTrait for EmailSenderAdapter {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(email, code)
            .await
            .map_err(|e| e.to_string())
    }
}
