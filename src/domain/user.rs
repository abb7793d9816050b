//! User data model.

use std::fmt;

/// Identifier assigned to a persisted [`User`] by the repository adapter.
///
/// The HTTP layer never generates identifiers; it only echoes path
/// parameters back in response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the underlying integer value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Unsaved user record handed to the repository.
///
/// Carries a single attribute. The name is an arbitrary string; validation is
/// deliberately out of scope for this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
}

impl NewUser {
    /// Build an unsaved record from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name the record will be stored under.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Consume the record, yielding its name.
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Persisted user record with its repository-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    /// Build a persisted record from its components.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Repository-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Stored name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
