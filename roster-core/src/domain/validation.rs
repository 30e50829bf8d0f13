//! Pure field validators enforced at the domain boundary.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::Error;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Single `@`; permissive local part, letters/digits/dot/hyphen domain.
        let pattern = "^[a-zA-Z0-9_!#$%&'*+/=?`{|}~^.-]+@[a-zA-Z0-9.-]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Reject an empty or whitespace-only value.
///
/// `field_name` is the wire-level field name and appears verbatim in the
/// error message.
pub fn validate_not_blank(field_name: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::constraint_violation(format!(
            "{field_name} expected to be not null and not blank"
        )));
    }
    Ok(())
}

/// Reject a value that does not match the `local-part@domain` email shape.
///
/// Callers must sequence [`validate_not_blank`] before this check.
pub fn validate_email(field_name: &str, value: &str) -> Result<(), Error> {
    if !email_regex().is_match(value) {
        return Err(Error::constraint_violation(format!(
            "{field_name} expected to be a valid email"
        )));
    }
    Ok(())
}
