use std::collections::HashMap;

use tokio::sync::RwLock;

/// Opaque bearer tokens mapped to the user id they were issued for.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    tokens: RwLock<HashMap<String, String>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for `user_id`.
    pub async fn issue(&self, user_id: &str) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.tokens
            .write()
            .await
            .insert(token.clone(), user_id.to_string());
        token
    }

    /// The user id a token was issued for.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.read().await.get(token).cloned()
    }

    pub async fn revoke(&self, token: &str) {
        self.tokens.write().await.remove(token);
    }
}
