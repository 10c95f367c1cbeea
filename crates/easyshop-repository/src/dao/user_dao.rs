//! UserDao trait: user account data access.

use async_trait::async_trait;
use easyshop_core::{StoreResult, User};
use shaku::Interface;

/// Returned by [`UserDao::get_id_by_username`] when no user matches.
pub const UNKNOWN_USER_ID: i32 = -1;

/// User account data access.
///
/// Write paths hash the password, then re-read the row by username and
/// return it with the password blanked.
#[async_trait]
pub trait UserDao: Interface + Send + Sync {
    /// Hashes the password, inserts the user and returns the persisted row.
    ///
    /// The generated id is written back to `new_user` when the store reports
    /// one; the re-read by username happens either way.
    async fn create(&self, new_user: &mut User) -> StoreResult<User>;

    /// Re-hashes the password, overwrites username, hash and role by id and
    /// returns the persisted row.
    async fn update(&self, updated_user: &User) -> StoreResult<User>;

    /// Lists every user.
    async fn get_all(&self) -> StoreResult<Vec<User>>;

    /// Finds a user by ID.
    async fn get_user_by_id(&self, id: i32) -> StoreResult<Option<User>>;

    /// Finds a user by username.
    async fn get_user_by_user_name(&self, username: &str) -> StoreResult<Option<User>>;

    /// Resolves a username to its id, or [`UNKNOWN_USER_ID`].
    async fn get_id_by_username(&self, username: &str) -> StoreResult<i32> {
        Ok(self
            .get_user_by_user_name(username)
            .await?
            .map_or(UNKNOWN_USER_ID, |user| user.id))
    }

    /// Checks if a username is taken.
    async fn exists(&self, username: &str) -> StoreResult<bool> {
        Ok(self.get_user_by_user_name(username).await?.is_some())
    }
}
