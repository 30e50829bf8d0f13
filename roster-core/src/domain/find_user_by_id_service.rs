//! Find-user-by-id domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{FindUserByIdQuery, UserRepository};
use crate::domain::{Error, User, UserId};

/// Find use case: read through the repository and normalize misses.
///
/// Storage adapters may represent "not found" either as an empty result or as
/// a present-but-idless record; both collapse into
/// [`Error::UserNotFound`] here so callers never see the storage
/// representation.
#[derive(Clone)]
pub struct FindUserByIdService<R> {
    repository: Arc<R>,
}

impl<R> FindUserByIdService<R> {
    /// Create the service over a repository adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> FindUserByIdQuery for FindUserByIdService<R>
where
    R: UserRepository,
{
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<User, Error> {
        let found = self.repository.find_by_user_id(user_id).await?;

        match found {
            Some(user) if user.id().is_some() => Ok(user),
            _ => Err(Error::user_not_found(user_id.as_ref())),
        }
    }
}

#[cfg(test)]
#[path = "find_user_by_id_service_tests.rs"]
mod find_user_by_id_service_tests;
