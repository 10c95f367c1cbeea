//! MySQL product DAO.

use super::rows::ProductRow;
use crate::dao::{ProductDao, ProductSearch};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use easyshop_core::{Product, StoreResult};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, warn};

/// MySQL product DAO implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductDao)]
pub struct MySqlProductDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductDao {
    /// Creates a new MySQL product DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductDao for MySqlProductDao {
    async fn search(&self, criteria: &ProductSearch) -> StoreResult<Vec<Product>> {
        debug!("Searching products: {:?}", criteria);

        let category_id = criteria.category_or_any();
        let min_price = criteria.min_price_or_any();
        let max_price = criteria.max_price_or_any();
        let sub_category = criteria.sub_category_or_any();

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, price, category_id, description,
                   subcategory, stock, featured, image_url
            FROM products
            WHERE (category_id = ? OR ? = -1)
              AND (price >= ? OR ? = -1)
              AND (price <= ? OR ? = -1)
              AND (subcategory = ? OR ? = '')
            "#,
        )
        .bind(category_id)
        .bind(category_id)
        .bind(min_price)
        .bind(min_price)
        .bind(max_price)
        .bind(max_price)
        .bind(sub_category)
        .bind(sub_category)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn list_by_category_id(&self, category_id: i32) -> StoreResult<Vec<Product>> {
        debug!("Listing products in category: {}", category_id);

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, price, category_id, description,
                   subcategory, stock, featured, image_url
            FROM products
            WHERE category_id = ?
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, product_id: i32) -> StoreResult<Option<Product>> {
        debug!("Finding product by id: {}", product_id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT product_id, name, price, category_id, description,
                   subcategory, stock, featured, image_url
            FROM products
            WHERE product_id = ?
            "#,
        )
        .bind(product_id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn create(&self, product: &Product) -> StoreResult<Option<Product>> {
        debug!("Creating product: {}", product.name);

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price, category_id, description, subcategory,
                                  image_url, stock, featured)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category_id)
        .bind(&product.description)
        .bind(&product.sub_category)
        .bind(&product.image_url)
        .bind(product.stock)
        .bind(product.is_featured)
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            warn!("Product insert affected no rows");
            return Ok(None);
        }

        // MySQL doesn't support RETURNING, so insert then select
        match i32::try_from(result.last_insert_id()) {
            Ok(product_id) if product_id > 0 => self.get_by_id(product_id).await,
            _ => {
                warn!("Product insert returned no usable id: {}", result.last_insert_id());
                Ok(None)
            }
        }
    }

    async fn update(&self, product_id: i32, product: &Product) -> StoreResult<()> {
        debug!("Updating product: {}", product_id);

        sqlx::query(
            r#"
            UPDATE products
            SET name = ?, price = ?, category_id = ?, description = ?,
                subcategory = ?, image_url = ?, stock = ?, featured = ?
            WHERE product_id = ?
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.category_id)
        .bind(&product.description)
        .bind(&product.sub_category)
        .bind(&product.image_url)
        .bind(product.stock)
        .bind(product.is_featured)
        .bind(product_id)
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn delete(&self, product_id: i32) -> StoreResult<()> {
        debug!("Deleting product: {}", product_id);

        sqlx::query("DELETE FROM products WHERE product_id = ?")
            .bind(product_id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlProductDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductDao").finish_non_exhaustive()
    }
}
