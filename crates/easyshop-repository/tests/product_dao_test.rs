//! Integration tests for MySqlProductDao.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use easyshop_core::Product;
use easyshop_repository::{MySqlProductDao, ProductDao, ProductSearch};
use rust_decimal::Decimal;

fn new_product(name: &str, price: Decimal, category_id: i32, sub_category: &str) -> Product {
    Product::new(
        0,
        name,
        price,
        category_id,
        "integration test product",
        sub_category,
        12,
        true,
        "test.jpg",
    )
}

fn ids(products: &[Product]) -> Vec<i32> {
    let mut ids: Vec<i32> = products.iter().map(|p| p.product_id).collect();
    ids.sort_unstable();
    ids
}

#[tokio::test]
async fn test_search_without_criteria_returns_catalog() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let found = dao.search(&ProductSearch::new()).await.expect("Search failed");

    assert_eq!(ids(&found), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn test_search_by_category() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let found = dao
        .search(&ProductSearch::new().with_category(1))
        .await
        .expect("Search failed");

    assert_eq!(ids(&found), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_search_price_bounds_are_inclusive() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let criteria = ProductSearch::new()
        .with_min_price(Decimal::new(2999, 2))
        .with_max_price(Decimal::new(9999, 2));
    let found = dao.search(&criteria).await.expect("Search failed");

    assert_eq!(ids(&found), vec![3, 4, 5, 6]);
}

#[tokio::test]
async fn test_search_combines_filters() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let criteria = ProductSearch::new()
        .with_category(1)
        .with_max_price(Decimal::new(50000, 2))
        .with_sub_category("Black");
    let found = dao.search(&criteria).await.expect("Search failed");

    assert_eq!(ids(&found), vec![1, 3]);
}

#[tokio::test]
async fn test_search_no_match_is_empty() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let found = dao
        .search(&ProductSearch::new().with_sub_category("Purple"))
        .await
        .expect("Search failed");

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_list_by_category_id() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let found = dao.list_by_category_id(2).await.expect("Query failed");
    assert_eq!(ids(&found), vec![4, 5]);

    let none = dao.list_by_category_id(99).await.expect("Query failed");
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_get_by_id_maps_null_columns_to_empty() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let towel = dao
        .get_by_id(7)
        .await
        .expect("Query failed")
        .expect("Product not found");

    assert_eq!(towel.name, "Tea Towel");
    assert_eq!(towel.price, Decimal::new(999, 2));
    assert_eq!(towel.description, "");
    assert_eq!(towel.sub_category, "");
    assert_eq!(towel.image_url, "");
    assert!(!towel.is_featured);
}

#[tokio::test]
async fn test_get_by_id_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let result = dao.get_by_id(999).await.expect("Query failed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_create_returns_stored_product() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let product = new_product("Desk Lamp", Decimal::new(3450, 2), 3, "White");
    let created = dao
        .create(&product)
        .await
        .expect("Failed to create product")
        .expect("Created product missing");

    assert!(created.product_id > 7);
    assert_eq!(created.name, "Desk Lamp");
    assert_eq!(created.price, Decimal::new(3450, 2));
    assert_eq!(created.sub_category, "White");
    assert_eq!(created.stock, 12);
    assert!(created.is_featured);

    let fetched = dao
        .get_by_id(created.product_id)
        .await
        .expect("Query failed")
        .expect("Product not found");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_overwrites_fields() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let changes = new_product("Laptop Pro", Decimal::new(129_999, 2), 1, "Silver");
    dao.update(2, &changes).await.expect("Failed to update product");

    let updated = dao
        .get_by_id(2)
        .await
        .expect("Query failed")
        .expect("Product not found");

    assert_eq!(updated.product_id, 2);
    assert_eq!(updated.name, "Laptop Pro");
    assert_eq!(updated.price, Decimal::new(129_999, 2));
    assert_eq!(updated.sub_category, "Silver");
    assert_eq!(updated.stock, 12);
}

#[tokio::test]
async fn test_update_missing_product_is_silent() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let changes = new_product("Ghost", Decimal::ONE, 1, "");
    dao.update(999, &changes).await.expect("Update should not fail");

    assert!(dao.get_by_id(999).await.expect("Query failed").is_none());
}

#[tokio::test]
async fn test_delete() {
    let db = TestDatabase::new().await;
    let dao = MySqlProductDao::new(db.pool());

    let created = dao
        .create(&new_product("Temp", Decimal::TEN, 3, ""))
        .await
        .expect("Failed to create product")
        .expect("Created product missing");

    dao.delete(created.product_id).await.expect("Failed to delete product");
    assert!(dao.get_by_id(created.product_id).await.expect("Query failed").is_none());

    dao.delete(created.product_id).await.expect("Repeat delete should not fail");
}
