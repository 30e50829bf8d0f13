//! Register-new-user domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{RegisterNewUserCommand, RegisterNewUserUseCase, UserRepository};
use crate::domain::{Error, User, UserId};

/// Register use case: assign identity through the repository and persist.
///
/// The command arrives already validated, so the service performs no
/// revalidation; exactly one record is written per call and repository
/// failures propagate unchanged. Retries, if any, belong to the adapter.
#[derive(Clone)]
pub struct RegisterNewUserService<R> {
    repository: Arc<R>,
}

impl<R> RegisterNewUserService<R> {
    /// Create the service over a repository adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RegisterNewUserUseCase for RegisterNewUserService<R>
where
    R: UserRepository,
{
    async fn handle(&self, command: RegisterNewUserCommand) -> Result<UserId, Error> {
        let user = User::without_id(command.first_name(), command.last_name(), command.email());
        let user_id = self.repository.register_new_user(&user).await?;
        Ok(user_id)
    }
}
