//! ProfileDao trait.

use async_trait::async_trait;
use easyshop_core::{Profile, StoreResult};
use shaku::Interface;

/// User profile data access. Profiles are never deleted through this layer.
#[async_trait]
pub trait ProfileDao: Interface + Send + Sync {
    /// Inserts a profile keyed by its `user_id` and returns the input unchanged.
    async fn create(&self, profile: &Profile) -> StoreResult<Profile>;

    /// Overwrites every field except the user id and returns the input unchanged.
    async fn update(&self, user_id: i32, profile: &Profile) -> StoreResult<Profile>;

    /// Finds the profile of a user. The returned `user_id` is the argument.
    async fn get_profile_by_user_id(&self, user_id: i32) -> StoreResult<Option<Profile>>;
}
