//! In-memory implementation of ProfileRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::trait_::ProfileRepository;

/// Mock identity store for testing
pub struct MockProfileRepository {
    profiles: Arc<RwLock<HashMap<String, bool>>>,
}

impl MockProfileRepository {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a profile with the verified flag unset (test helper)
    pub async fn add_profile(&self, user_id: &str) {
        self.profiles
            .write()
            .await
            .insert(user_id.to_string(), false);
    }

    /// Read the verified flag (test helper)
    pub async fn is_email_verified(&self, user_id: &str) -> bool {
        self.profiles
            .read()
            .await
            .get(user_id)
            .copied()
            .unwrap_or(false)
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn mark_email_verified(&self, user_id: &str) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;

        match profiles.get_mut(user_id) {
            Some(verified) => {
                *verified = true;
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: "Profile".to_string(),
            }),
        }
    }
}
