//! Driving port for the register-new-user use case.

use async_trait::async_trait;

use crate::domain::validation::{validate_email, validate_not_blank};
use crate::domain::{Error, UserId};

/// Validated intent to register a new user.
///
/// Construction fails fast with [`Error::ConstraintViolation`] on a blank
/// field or a malformed email, so holding an instance is proof the input
/// passed the boundary rules. Field names in error messages are the
/// wire-level names (`firstName`, `lastName`, `email`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterNewUserCommand {
    first_name: String,
    last_name: String,
    email: String,
}

impl RegisterNewUserCommand {
    /// Validate the three fields and build the command.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, Error> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let email = email.into();

        validate_not_blank("firstName", &first_name)?;
        validate_not_blank("lastName", &last_name)?;
        validate_not_blank("email", &email)?;
        validate_email("email", &email)?;

        Ok(Self {
            first_name,
            last_name,
            email,
        })
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegisterNewUserUseCase: Send + Sync {
    /// Persist the command's user and return the minted identifier.
    async fn handle(&self, command: RegisterNewUserCommand) -> Result<UserId, Error>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_input_builds_a_command() {
        let command = RegisterNewUserCommand::new("Homer", "Simpson", "homer.simpson@unit.test")
            .expect("valid command");

        assert_eq!(command.first_name(), "Homer");
        assert_eq!(command.last_name(), "Simpson");
        assert_eq!(command.email(), "homer.simpson@unit.test");
    }

    #[rstest]
    #[case("", "Simpson", "e@x.com", "firstName")]
    #[case("   ", "Simpson", "e@x.com", "firstName")]
    #[case("Bart", "", "e@x.com", "lastName")]
    #[case("Bart", "Simpson", "", "email")]
    fn blank_fields_fail_construction(
        #[case] first_name: &str,
        #[case] last_name: &str,
        #[case] email: &str,
        #[case] field: &str,
    ) {
        let err =
            RegisterNewUserCommand::new(first_name, last_name, email).expect_err("blank field");

        assert!(matches!(err, Error::ConstraintViolation { .. }));
        assert_eq!(
            err.to_string(),
            format!("{field} expected to be not null and not blank")
        );
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("two@at@signs")]
    fn malformed_email_fails_construction(#[case] email: &str) {
        let err = RegisterNewUserCommand::new("Bart", "Simpson", email).expect_err("bad email");

        assert!(matches!(err, Error::ConstraintViolation { .. }));
        assert_eq!(err.to_string(), "email expected to be a valid email");
    }

    #[rstest]
    fn blank_check_runs_before_the_email_shape_check() {
        let err = RegisterNewUserCommand::new("Bart", "Simpson", "  ").expect_err("blank email");

        assert_eq!(
            err.to_string(),
            "email expected to be not null and not blank"
        );
    }
}
