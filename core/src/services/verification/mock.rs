//! Mock email sender for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::traits::EmailSenderTrait;

/// Mock email sender that records dispatched codes instead of sending.
pub struct MockEmailSender {
    sent_codes: Arc<Mutex<HashMap<String, String>>>,
    sent_count: Arc<Mutex<u64>>,
    should_fail: bool,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::with_failure(false)
    }

    /// Create a sender that fails every dispatch (for failure-path tests)
    pub fn with_failure(should_fail: bool) -> Self {
        Self {
            sent_codes: Arc::new(Mutex::new(HashMap::new())),
            sent_count: Arc::new(Mutex::new(0)),
            should_fail,
        }
    }

    /// Last code dispatched to an address
    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent_codes.lock().unwrap().get(email).cloned()
    }

    /// Total number of dispatches attempted successfully
    pub fn sent_count(&self) -> u64 {
        *self.sent_count.lock().unwrap()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSenderTrait for MockEmailSender {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("email service error".to_string());
        }
        self.sent_codes
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());
        *self.sent_count.lock().unwrap() += 1;
        Ok(format!("mock-msg-{}", Uuid::new_v4()))
    }
}
