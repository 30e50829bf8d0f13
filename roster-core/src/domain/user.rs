//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::validation::validate_not_blank;

/// Stable user identifier backed by a non-blank string.
///
/// ## Invariants
/// - The wrapped string is never empty or whitespace-only.
///
/// New identifiers are minted by the repository at registration time via
/// [`UserId::random`]; callers never supply an id for a new user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from caller input.
    pub fn new(id: impl Into<String>) -> Result<Self, Error> {
        let id = id.into();
        validate_not_blank("id", &id)?;
        Ok(Self(id))
    }

    /// Mint a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user.
///
/// Identity is optional: a user built with [`User::without_id`] has not been
/// persisted yet, one built with [`User::with_id`] carries the identifier the
/// repository minted or loaded. Instances are immutable; the system has no
/// update or delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: Option<UserId>,
    first_name: String,
    last_name: String,
    email: String,
}

impl User {
    /// Build a user that has not been persisted yet.
    pub fn without_id(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Build a persisted user carrying its storage identifier.
    pub fn with_id(
        id: UserId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Storage identifier, absent before persistence.
    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
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

/// Wire shape of a user record: one entry keyed by id with three string
/// fields, matching the persisted record layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
        } = value;
        Self {
            id: id.map(String::from),
            first_name,
            last_name,
            email,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = Error;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            first_name,
            last_name,
            email,
        } = value;

        let id = id.map(UserId::new).transpose()?;
        Ok(Self {
            id,
            first_name,
            last_name,
            email,
        })
    }
}
