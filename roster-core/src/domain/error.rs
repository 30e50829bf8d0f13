//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses, handler payloads, or any other protocol-specific envelope:
//! [`Error::ConstraintViolation`] and [`Error::UserNotFound`] are recoverable
//! by the caller, [`Error::Storage`] is a generic failure.

use crate::domain::ports::UserRepositoryError;

/// Errors surfaced by the user use cases.
///
/// ## Invariants
/// - Validation failures are raised at command/id construction, before any
///   I/O is attempted, so bad input never causes a partial side effect.
/// - Repository failures pass through unchanged; the core performs no retry,
///   backoff, or suppression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A command or query input failed validation at the domain boundary.
    #[error("{message}")]
    ConstraintViolation {
        /// Which constraint was violated, phrased for the caller.
        message: String,
    },
    /// No user record matched the requested identifier.
    #[error("Couldn't find user with id: {id}")]
    UserNotFound {
        /// The identifier that missed.
        id: String,
    },
    /// The repository adapter failed.
    #[error(transparent)]
    Storage(#[from] UserRepositoryError),
}

impl Error {
    /// Convenience constructor for [`Error::ConstraintViolation`].
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::UserNotFound`].
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }
}
