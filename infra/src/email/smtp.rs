//! SMTP Email Service Implementation
//!
//! Delivers verification emails through an SMTP relay using lettre.
//!
//! ## Features
//!
//! - STARTTLS relay connection with credential authentication
//! - Bounded operation timeout
//! - Email address masking in logs

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use ic_shared::config::EmailConfig;
use ic_shared::utils::email::mask_email;

use crate::InfrastructureError;

use super::email_service::EmailService;

/// SMTP email service configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub host: String,
    /// SMTP relay port
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password
    pub password: String,
    /// Sender address
    pub from_address: String,
    /// Sender display name
    pub from_name: String,
    /// Timeout for SMTP operations in seconds
    pub request_timeout_secs: u64,
}

impl SmtpConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let host = std::env::var("SMTP_HOST")
            .map_err(|_| InfrastructureError::Config("SMTP_HOST not set".to_string()))?;
        let username = std::env::var("SMTP_USERNAME")
            .map_err(|_| InfrastructureError::Config("SMTP_USERNAME not set".to_string()))?;
        let password = std::env::var("SMTP_PASSWORD")
            .map_err(|_| InfrastructureError::Config("SMTP_PASSWORD not set".to_string()))?;
        let from_address = std::env::var("SMTP_FROM_ADDRESS")
            .map_err(|_| InfrastructureError::Config("SMTP_FROM_ADDRESS not set".to_string()))?;

        Ok(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            username,
            password,
            from_address,
            from_name: std::env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "IIT Connect".to_string()),
            request_timeout_secs: std::env::var("SMTP_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create configuration from the shared email configuration
    pub fn from_email_config(config: &EmailConfig) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            username: config.smtp_username.clone(),
            password: config.smtp_password.clone(),
            from_address: config.from_address.clone(),
            from_name: config.from_name.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }

    /// Mailbox string used in the From header
    fn from_mailbox(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_address)
    }
}

/// SMTP email service implementation
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: SmtpConfig,
}

impl SmtpEmailService {
    /// Create a new SMTP email service
    pub fn new(config: SmtpConfig) -> Result<Self, InfrastructureError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| {
                InfrastructureError::Config(format!("Invalid SMTP relay configuration: {}", e))
            })?
            .port(config.port)
            .credentials(credentials)
            .timeout(Some(Duration::from_secs(config.request_timeout_secs)))
            .build();

        tracing::info!(
            host = %config.host,
            port = config.port,
            from = %mask_email(&config.from_address),
            "SMTP email service initialized"
        );

        Ok(Self { transport, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(SmtpConfig::from_env()?)
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<String, InfrastructureError> {
        let from: Mailbox = self
            .config
            .from_mailbox()
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;
        let to_mailbox: Mailbox = to.parse().map_err(|e| {
            InfrastructureError::Email(format!(
                "Invalid recipient address {}: {}",
                mask_email(to),
                e
            ))
        })?;

        let message = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(subject)
            .singlepart(SinglePart::html(body_html.to_string()))
            .map_err(|e| InfrastructureError::Email(format!("Failed to build message: {}", e)))?;

        let response = self.transport.send(message).await.map_err(|e| {
            tracing::error!(
                to = %mask_email(to),
                error = %e,
                "SMTP delivery failed"
            );
            InfrastructureError::Email(format!("SMTP delivery failed: {}", e))
        })?;

        let detail = response.message().collect::<Vec<&str>>().join(" ");
        let message_id = if detail.is_empty() {
            response.code().to_string()
        } else {
            detail
        };

        tracing::info!(
            to = %mask_email(to),
            message_id = %message_id,
            "Verification email delivered via SMTP"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}
