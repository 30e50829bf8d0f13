//! Outbound port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

/// Persistence errors raised by user repository adapters.
///
/// Adapters fold their transport-specific failures (connectivity, throttling,
/// serialization) into these shapes; the use-case services propagate them
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl UserRepositoryError {
    /// Construct a [`UserRepositoryError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`UserRepositoryError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Capability boundary any storage adapter must implement.
///
/// A miss is `Ok(None)`, never an error: translating absence into
/// [`crate::domain::Error::UserNotFound`] is the find service's job, so
/// adapters stay free to represent "not found" however their store does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user constructed without id under a newly minted unique
    /// identifier and return that identifier. One durable write per call.
    async fn register_new_user(&self, user: &User) -> Result<UserId, UserRepositoryError>;

    /// Fetch a user by identifier; the stored entity always carries its id.
    async fn find_by_user_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture repository for tests that do not exercise persistence: every
/// registration mints an id without storing, every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn register_new_user(&self, _user: &User) -> Result<UserId, UserRepositoryError> {
        Ok(UserId::random())
    }

    async fn find_by_user_id(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}
