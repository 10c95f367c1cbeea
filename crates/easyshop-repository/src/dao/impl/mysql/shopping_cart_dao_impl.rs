//! MySQL shopping cart DAO.

use super::rows::{cart_from_rows, CartLineRow};
use crate::dao::ShoppingCartDao;
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use easyshop_core::{ShoppingCart, ShoppingCartItem, StoreError, StoreResult};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL shopping cart DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = ShoppingCartDao)]
pub struct MySqlShoppingCartDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlShoppingCartDao {
    /// Creates a new MySQL shopping cart DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingCartDao for MySqlShoppingCartDao {
    async fn get_by_user_id(&self, user_id: i32) -> StoreResult<ShoppingCart> {
        debug!("Loading cart for user: {}", user_id);

        let rows = sqlx::query_as::<_, CartLineRow>(
            r#"
            SELECT p.product_id, p.name, p.price, p.category_id, p.description,
                   p.subcategory, p.stock, p.featured, p.image_url, sc.quantity
            FROM shopping_cart sc
            JOIN products p ON sc.product_id = p.product_id
            WHERE sc.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(cart_from_rows(rows))
    }

    async fn get_by_order_id(&self, order_id: i32) -> StoreResult<ShoppingCart> {
        debug!("Loading line items for order: {}", order_id);

        let rows = sqlx::query_as::<_, CartLineRow>(
            r#"
            SELECT p.product_id, p.name, p.price, p.category_id, p.description,
                   p.subcategory, p.stock, p.featured, p.image_url, oli.quantity
            FROM order_line_items oli
            JOIN orders o ON oli.order_id = o.order_id
            JOIN products p ON oli.product_id = p.product_id
            WHERE oli.order_id = ?
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(cart_from_rows(rows))
    }

    async fn add_item(&self, user_id: i32, item: &ShoppingCartItem) -> StoreResult<ShoppingCart> {
        debug!("Adding product {} to cart of user {}", item.product_id(), user_id);

        // the store's unique (user_id, product_id) key turns a repeat add into an increment
        sqlx::query(
            r#"
            INSERT INTO shopping_cart (user_id, product_id, quantity)
            VALUES (?, ?, 1)
            ON DUPLICATE KEY UPDATE quantity = quantity + 1
            "#,
        )
        .bind(user_id)
        .bind(item.product_id())
        .execute(self.pool.inner())
        .await?;

        self.get_by_user_id(user_id).await
    }

    async fn update_item(&self, user_id: i32, item: &ShoppingCartItem) -> StoreResult<()> {
        debug!(
            "Setting quantity of product {} to {} for user {}",
            item.product_id(),
            item.quantity,
            user_id
        );

        let result = sqlx::query(
            r#"
            UPDATE shopping_cart
            SET quantity = ?
            WHERE user_id = ? AND product_id = ?
            "#,
        )
        .bind(item.quantity)
        .bind(user_id)
        .bind(item.product_id())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::no_rows_affected(format!(
                "Update failed, no cart row for user {} and product {}",
                user_id,
                item.product_id()
            )));
        }

        Ok(())
    }

    async fn delete_shopping_cart(&self, user_id: i32) -> StoreResult<()> {
        debug!("Clearing cart for user: {}", user_id);

        sqlx::query("DELETE FROM shopping_cart WHERE user_id = ?")
            .bind(user_id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlShoppingCartDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlShoppingCartDao").finish_non_exhaustive()
    }
}
