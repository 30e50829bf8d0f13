//! Driving port for looking a user up by identifier.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading a single user.
///
/// Unlike the repository port, absence here is an error: implementations
/// normalize every storage representation of "not found" into
/// [`Error::UserNotFound`] so callers never special-case the adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FindUserByIdQuery: Send + Sync {
    /// Return the stored user for `user_id`.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<User, Error>;
}
