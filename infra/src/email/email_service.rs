//! Email Service Interface
//!
//! Defines the trait for email service implementations that deliver
//! verification codes.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Subject line for verification emails
pub const VERIFICATION_SUBJECT: &str = "Your IIT Connect Verification Code";

/// Email service trait for outbound mail
///
/// Implementations include:
/// - SMTP delivery via lettre
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an HTML email.
    ///
    /// # Arguments
    ///
    /// * `to` - The recipient address
    /// * `subject` - Message subject
    /// * `body_html` - HTML message body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a verification code using the standard template.
    ///
    /// The code is the only dynamic content in the message.
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        self.send_email(to, VERIFICATION_SUBJECT, &verification_email_body(code))
            .await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available.
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Render the fixed verification email template around a code.
pub fn verification_email_body(code: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h1 style="color: #1a365d; text-align: center;">IIT Connect</h1>
  <div style="background: #f7fafc; border-radius: 8px; padding: 30px; text-align: center;">
    <h2 style="color: #2d3748; margin-bottom: 20px;">Verify Your Email</h2>
    <p style="color: #4a5568; margin-bottom: 20px;">
      Enter this code to verify your IIT email address:
    </p>
    <div style="background: #1a365d; color: white; font-size: 32px; letter-spacing: 8px; padding: 20px; border-radius: 8px; font-weight: bold;">
      {code}
    </div>
    <p style="color: #718096; margin-top: 20px; font-size: 14px;">
      This code expires in 10 minutes.
    </p>
  </div>
  <p style="color: #a0aec0; text-align: center; margin-top: 20px; font-size: 12px;">
    If you didn't request this code, please ignore this email.
  </p>
</div>"#
    )
}
