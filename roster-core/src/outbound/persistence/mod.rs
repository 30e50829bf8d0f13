//! Storage adapters for the user repository port.
//!
//! Durable adapters (key-value tables, databases) live with the deployments
//! that own them; this module carries the in-memory reference adapter the
//! tests run against.

mod memory_user_repository;

pub use self::memory_user_repository::InMemoryUserRepository;
