//! User account entity.

use serde::{Deserialize, Serialize};

/// Role granted to ordinary shoppers.
pub const ROLE_USER: &str = "ROLE_USER";

/// Role granted to store administrators.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// A user account.
///
/// `password` holds the plaintext on the way in and the stored hash when read
/// back by a lookup. Objects returned from a create or update carry `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct User {
    /// Store-assigned identifier, `0` until persisted.
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: String,
}

impl User {
    /// Creates an unsaved user.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }

    /// Blanks the password so neither hash nor plaintext leaves the data layer.
    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}
