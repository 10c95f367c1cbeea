//! MySQL user DAO.

use super::rows::UserRow;
use crate::dao::UserDao;
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use easyshop_core::{StoreError, StoreResult, User};
use easyshop_security::PasswordHasherInterface;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, warn};

/// MySQL user DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserDao)]
pub struct MySqlUserDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
    #[shaku(inject)]
    hasher: Arc<dyn PasswordHasherInterface>,
}

impl MySqlUserDao {
    /// Creates a new MySQL user DAO.
    #[must_use]
    pub fn new(
        pool: Arc<dyn DatabasePoolInterface>,
        hasher: Arc<dyn PasswordHasherInterface>,
    ) -> Self {
        Self { pool, hasher }
    }

    /// Re-reads a freshly written user and blanks its password.
    async fn reload_without_password(&self, username: &str) -> StoreResult<User> {
        let mut user = self
            .get_user_by_user_name(username)
            .await?
            .ok_or_else(|| {
                StoreError::internal(format!("User '{}' not found after write", username))
            })?;

        user.clear_password();
        Ok(user)
    }
}

#[async_trait]
impl UserDao for MySqlUserDao {
    async fn create(&self, new_user: &mut User) -> StoreResult<User> {
        debug!("Creating user: {}", new_user.username);

        let hashed_password = self.hasher.hash(&new_user.password)?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, hashed_password, role)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&new_user.username)
        .bind(&hashed_password)
        .bind(&new_user.role)
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() > 0 {
            match i32::try_from(result.last_insert_id()) {
                Ok(user_id) if user_id > 0 => new_user.id = user_id,
                _ => warn!("User insert returned no usable id for {}", new_user.username),
            }
        }

        self.reload_without_password(&new_user.username).await
    }

    async fn update(&self, updated_user: &User) -> StoreResult<User> {
        debug!("Updating user: {}", updated_user.id);

        let hashed_password = self.hasher.hash(&updated_user.password)?;

        sqlx::query(
            r#"
            UPDATE users
            SET username = ?, hashed_password = ?, role = ?
            WHERE user_id = ?
            "#,
        )
        .bind(&updated_user.username)
        .bind(&hashed_password)
        .bind(&updated_user.role)
        .bind(updated_user.id)
        .execute(self.pool.inner())
        .await?;

        self.reload_without_password(&updated_user.username).await
    }

    async fn get_all(&self) -> StoreResult<Vec<User>> {
        debug!("Listing all users");

        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, username, hashed_password, role FROM users",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn get_user_by_id(&self, id: i32) -> StoreResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, username, hashed_password, role FROM users WHERE user_id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_user_by_user_name(&self, username: &str) -> StoreResult<Option<User>> {
        debug!("Finding user by username: {}", username);

        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, username, hashed_password, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }
}

impl std::fmt::Debug for MySqlUserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDao").finish_non_exhaustive()
    }
}
