//! Password hashing using Argon2id.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use easyshop_config::SecurityConfig;
use easyshop_core::{StoreError, StoreResult};
use shaku::{Component, Interface};
use std::sync::Arc;
use tracing::debug;

/// Hashing collaborator used by the user DAO.
pub trait PasswordHasherInterface: Interface + Send + Sync {
    /// Hashes a plaintext password with a fresh random salt.
    fn hash(&self, password: &str) -> StoreResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> StoreResult<bool>;

    /// Checks if a stored hash was produced with a different algorithm.
    fn needs_rehash(&self, hash: &str) -> bool;
}

/// Argon2id password hasher.
#[derive(Component, Clone)]
#[shaku(interface = PasswordHasherInterface)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a new password hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Creates a new password hasher with custom parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Arc::new(Argon2::new(Algorithm::Argon2id, Version::V0x13, params)),
        }
    }

    /// Creates a password hasher from a memory cost in MiB.
    ///
    /// Falls back to the library defaults if the cost is out of range.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        let params = Params::new(cost.saturating_mul(1024), 3, 1, None).unwrap_or(Params::DEFAULT);
        Self::with_params(params)
    }

    /// Creates a password hasher from the security configuration.
    #[must_use]
    pub fn from_config(config: &SecurityConfig) -> Self {
        Self::with_cost(config.password_hash_cost)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherInterface for PasswordHasher {
    fn hash(&self, password: &str) -> StoreResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| StoreError::PasswordHash(format!("Failed to hash password: {}", e)))?;

        debug!("Password hashed");
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> StoreResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| StoreError::PasswordHash(format!("Invalid password hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(StoreError::PasswordHash(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map_or(true, |parsed| parsed.algorithm != Algorithm::Argon2id.ident())
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}
