//! Domain model, validation, ports, and use-case services.
//!
//! Everything here is transport and storage agnostic: inbound adapters build
//! commands and queries, outbound adapters implement the repository port, and
//! the services in between carry the only business rules the system has.

pub mod error;
pub mod ports;
pub mod user;
pub mod validation;

mod find_user_by_id_service;
mod register_new_user_service;
mod user_service;

pub use self::error::Error;
pub use self::find_user_by_id_service::FindUserByIdService;
pub use self::register_new_user_service::RegisterNewUserService;
pub use self::user::{User, UserId};
pub use self::user_service::UserService;
