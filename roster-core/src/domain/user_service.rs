//! Application facade wiring both user use cases over one repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    FindUserByIdQuery, RegisterNewUserCommand, RegisterNewUserUseCase, UserRepository,
};
use crate::domain::{Error, FindUserByIdService, RegisterNewUserService, User, UserId};

/// Register and find services composed over a shared repository adapter.
///
/// Callers that need both operations wire this single object instead of
/// assembling the two services by hand; it implements both driving ports by
/// delegation.
#[derive(Clone)]
pub struct UserService<R> {
    register: RegisterNewUserService<R>,
    find: FindUserByIdService<R>,
}

impl<R> UserService<R> {
    /// Build both use cases over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            register: RegisterNewUserService::new(Arc::clone(&repository)),
            find: FindUserByIdService::new(repository),
        }
    }
}

#[async_trait]
impl<R> RegisterNewUserUseCase for UserService<R>
where
    R: UserRepository,
{
    async fn handle(&self, command: RegisterNewUserCommand) -> Result<UserId, Error> {
        self.register.handle(command).await
    }
}

#[async_trait]
impl<R> FindUserByIdQuery for UserService<R>
where
    R: UserRepository,
{
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<User, Error> {
        self.find.find_by_user_id(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixtureUserRepository;

    #[tokio::test]
    async fn delegates_registration_to_the_register_use_case() {
        let service = UserService::new(Arc::new(FixtureUserRepository));
        let command = RegisterNewUserCommand::new("Homer", "Simpson", "homer.simpson@unit.test")
            .expect("valid command");

        let user_id = service.handle(command).await.expect("registration");
        assert!(!user_id.as_ref().trim().is_empty());
    }

    #[tokio::test]
    async fn delegates_lookup_to_the_find_use_case() {
        let service = UserService::new(Arc::new(FixtureUserRepository));
        let user_id = UserId::random();

        let err = service
            .find_by_user_id(&user_id)
            .await
            .expect_err("fixture store is empty");
        assert_eq!(err, Error::user_not_found(user_id.as_ref()));
    }
}
