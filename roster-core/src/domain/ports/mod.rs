//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`RegisterNewUserUseCase`], [`FindUserByIdQuery`]) face
//! inbound adapters; the driven [`UserRepository`] port faces storage
//! adapters. Any capability-compatible implementation substitutes without the
//! core noticing.

mod find_user_by_id_query;
mod register_new_user_use_case;
mod user_repository;

#[cfg(test)]
pub use find_user_by_id_query::MockFindUserByIdQuery;
pub use find_user_by_id_query::FindUserByIdQuery;
#[cfg(test)]
pub use register_new_user_use_case::MockRegisterNewUserUseCase;
pub use register_new_user_use_case::{RegisterNewUserCommand, RegisterNewUserUseCase};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
