//! Hexagonal application core for registering users and finding them by id.
//!
//! The crate exposes two driving ports ([`domain::ports::RegisterNewUserUseCase`],
//! [`domain::ports::FindUserByIdQuery`]), one driven port
//! ([`domain::ports::UserRepository`]) that any key-value storage adapter can
//! implement, and a checkpoint/restore [`lifecycle::PrimingController`] that
//! warms the read path before a snapshot-based runtime freezes the process.
//! Transport adapters, table provisioning, and framework wiring live with the
//! callers that own them.

pub mod domain;
pub mod lifecycle;
pub mod outbound;

pub use domain::{Error, User, UserId};
