//! MySQL profile DAO.

use super::rows::ProfileRow;
use crate::dao::ProfileDao;
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use easyshop_core::{Profile, StoreResult};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL profile DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProfileDao)]
pub struct MySqlProfileDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProfileDao {
    /// Creates a new MySQL profile DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileDao for MySqlProfileDao {
    async fn create(&self, profile: &Profile) -> StoreResult<Profile> {
        debug!("Creating profile for user: {}", profile.user_id);

        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, first_name, last_name, phone, email,
                                  address, city, state, zip)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.phone)
        .bind(&profile.email)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.zip)
        .execute(self.pool.inner())
        .await?;

        Ok(profile.clone())
    }

    async fn update(&self, user_id: i32, profile: &Profile) -> StoreResult<Profile> {
        debug!("Updating profile for user: {}", user_id);

        sqlx::query(
            r#"
            UPDATE profiles
            SET first_name = ?, last_name = ?, phone = ?, email = ?,
                address = ?, city = ?, state = ?, zip = ?
            WHERE user_id = ?
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.phone)
        .bind(&profile.email)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.zip)
        .bind(user_id)
        .execute(self.pool.inner())
        .await?;

        Ok(profile.clone())
    }

    async fn get_profile_by_user_id(&self, user_id: i32) -> StoreResult<Option<Profile>> {
        debug!("Finding profile by user id: {}", user_id);

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT first_name, last_name, phone, email, address, city, state, zip
            FROM profiles
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(|row| row.into_profile(user_id)))
    }
}

impl std::fmt::Debug for MySqlProfileDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProfileDao").finish_non_exhaustive()
    }
}
