//! In-memory key-value adapter for the user repository port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

/// Map-backed repository keyed by id string.
///
/// Registration mints the identifier and stores the entity with it, the same
/// mint-then-put contract a keyed table adapter follows; lookups clone.
/// Single-process only — durable storage stays with external adapters.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn register_new_user(&self, user: &User) -> Result<UserId, UserRepositoryError> {
        let user_id = UserId::random();
        let stored = User::with_id(
            user_id.clone(),
            user.first_name(),
            user.last_name(),
            user.email(),
        );

        self.users
            .write()
            .await
            .insert(user_id.as_ref().to_owned(), stored);
        Ok(user_id)
    }

    async fn find_by_user_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.read().await.get(id.as_ref()).cloned())
    }
}
