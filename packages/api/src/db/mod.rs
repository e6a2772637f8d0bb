//! # User persistence
//!
//! The server reads and writes users only through the [`UserRepository`]
//! trait, so the document store behind it is replaceable. The crate ships
//! [`MemoryUserRepository`], a process-local map used by the development
//! server and by tests.
//!
//! Emails are compared in the normalised form produced at registration
//! (trimmed, lower-cased); the repository does not normalise them itself.

mod memory;

pub use memory::MemoryUserRepository;

use async_trait::async_trait;

use crate::models::UserRecord;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Conflict(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, RepositoryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// Insert a new record. Fails with [`RepositoryError::Conflict`] if the id
    /// or email is already taken.
    async fn insert(&self, record: UserRecord) -> Result<(), RepositoryError>;

    /// Overwrite an existing record.
    async fn save(&self, record: UserRecord) -> Result<(), RepositoryError>;
}
