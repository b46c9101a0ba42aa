//! Mock Email Service Implementation
//!
//! A mock implementation of the email service for development and testing.
//! Messages are logged instead of being delivered.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use ic_shared::utils::email::mask_email;

use crate::InfrastructureError;

use super::email_service::EmailService;

/// A message captured by the mock service
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body_html: String,
}

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs outbound messages instead of sending them
/// - Records every message for test inspection
/// - Generates mock message ids
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for the number of messages sent
    message_count: Arc<AtomicU64>,
    /// Captured messages, in send order
    sent: Arc<Mutex<Vec<SentEmail>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self::with_options(false)
    }

    /// Create a mock service with configurable failure simulation
    pub fn with_options(simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Get the last message sent to an address
    pub fn last_message_to(&self, to: &str) -> Option<SentEmail> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|m| m.to == to)
            .cloned()
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body_html: &str,
    ) -> Result<String, InfrastructureError> {
        if !to.contains('@') {
            return Err(InfrastructureError::Email(format!(
                "Invalid recipient address: {}",
                mask_email(to)
            )));
        }

        if self.simulate_failure {
            return Err(InfrastructureError::Email(
                "Simulated email delivery failure".to_string(),
            ));
        }

        self.message_count.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body_html: body_html.to_string(),
        });

        let message_id = format!("mock-{}", Uuid::new_v4());

        tracing::info!(
            to = %mask_email(to),
            subject,
            message_id = %message_id,
            "Mock email dispatched"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
