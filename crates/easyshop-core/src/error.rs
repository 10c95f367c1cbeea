//! Store error type shared by every data access object.

use std::error::Error as StdError;
use std::fmt::Debug;
use thiserror::Error;

/// Boxed driver error kept as the source of a [`StoreError::Database`].
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised by the EasyShop data access layer.
///
/// "Not found" is never an error here: lookups return `Option::None`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store or connectivity failure (unreachable database, malformed statement, ...).
    #[error("Database error: {0}")]
    Database(#[source] BoxedCause),

    /// A statement that must touch an existing row touched none.
    #[error("No rows affected: {0}")]
    NoRowsAffected(String),

    /// The password hashing collaborator failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::NoRowsAffected(_) => "NO_ROWS_AFFECTED",
            Self::PasswordHash(_) => "PASSWORD_HASH_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Wraps any driver error as a database failure.
    pub fn database<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Database(Box::new(cause))
    }

    /// Creates a no-rows-affected error.
    #[must_use]
    pub fn no_rows_affected<T: Into<String>>(message: T) -> Self {
        Self::NoRowsAffected(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::database(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}
