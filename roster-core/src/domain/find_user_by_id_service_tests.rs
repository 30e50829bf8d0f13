//! Tests for the find-user-by-id service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockUserRepository, UserRepositoryError};

fn service_with(repo: MockUserRepository) -> FindUserByIdService<MockUserRepository> {
    FindUserByIdService::new(Arc::new(repo))
}

#[tokio::test]
async fn returns_the_stored_user_when_the_id_exists() {
    let user_id = UserId::new("abc-123").expect("valid id");
    let stored = User::with_id(
        user_id.clone(),
        "Homer",
        "Simpson",
        "homer.simpson@unit.test",
    );
    let mut repo = MockUserRepository::new();

    let returned = stored.clone();
    repo.expect_find_by_user_id()
        .withf(move |id: &UserId| id.as_ref() == "abc-123")
        .times(1)
        .return_once(move |_| Ok(Some(returned)));

    let found = service_with(repo)
        .find_by_user_id(&user_id)
        .await
        .expect("user found");

    assert_eq!(found, stored);
}

#[tokio::test]
async fn translates_an_empty_result_into_user_not_found() {
    let user_id = UserId::new("missing-id").expect("valid id");
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_user_id()
        .times(1)
        .return_once(|_| Ok(None));

    let err = service_with(repo)
        .find_by_user_id(&user_id)
        .await
        .expect_err("miss");

    assert_eq!(err, Error::user_not_found("missing-id"));
    assert_eq!(err.to_string(), "Couldn't find user with id: missing-id");
}

#[tokio::test]
async fn translates_an_idless_record_into_user_not_found() {
    // Some adapters hand back a record with no identity instead of an empty
    // result; the service must not treat that as success.
    let user_id = UserId::new("anomalous-id").expect("valid id");
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_user_id()
        .times(1)
        .return_once(|_| Ok(Some(User::without_id("Homer", "Simpson", "h@unit.test"))));

    let err = service_with(repo)
        .find_by_user_id(&user_id)
        .await
        .expect_err("idless record");

    assert_eq!(err, Error::user_not_found("anomalous-id"));
}

#[tokio::test]
async fn propagates_repository_failures_unchanged() {
    let user_id = UserId::new("abc-123").expect("valid id");
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_user_id()
        .times(1)
        .return_once(|_| Err(UserRepositoryError::query("throttled")));

    let err = service_with(repo)
        .find_by_user_id(&user_id)
        .await
        .expect_err("storage failure");

    assert_eq!(err, Error::Storage(UserRepositoryError::query("throttled")));
}
