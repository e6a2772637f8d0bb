use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepositoryError, UserRepository};
use crate::models::UserRecord;

/// In-memory UserRepository keyed by user id.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|r| r.user.email == email)
            .cloned())
    }

    async fn insert(&self, record: UserRecord) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(&record.user.id) {
            return Err(RepositoryError::Conflict(format!(
                "User {} already exists",
                record.user.id
            )));
        }
        if users.values().any(|r| r.user.email == record.user.email) {
            return Err(RepositoryError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }
        users.insert(record.user.id.clone(), record);
        Ok(())
    }

    async fn save(&self, record: UserRecord) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;
        match users.get_mut(&record.user.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::Storage(format!(
                "User {} does not exist",
                record.user.id
            ))),
        }
    }
}
