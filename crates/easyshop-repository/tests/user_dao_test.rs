//! Integration tests for MySqlUserDao.
//!
//! Uses a low-cost hasher so the suite stays fast.

mod common;

use common::TestDatabase;
use easyshop_core::{User, ROLE_ADMIN, ROLE_USER};
use easyshop_repository::{MySqlUserDao, UserDao};
use easyshop_security::{PasswordHasher, PasswordHasherInterface};
use std::sync::Arc;

fn hasher() -> Arc<PasswordHasher> {
    Arc::new(PasswordHasher::with_cost(1))
}

fn user_dao(db: &TestDatabase) -> MySqlUserDao {
    MySqlUserDao::new(db.pool(), hasher())
}

#[tokio::test]
async fn test_create_assigns_id_and_clears_password() {
    let db = TestDatabase::new().await;
    let dao = user_dao(&db);

    let mut new_user = User::new("george", "password", ROLE_USER);
    let created = dao.create(&mut new_user).await.expect("Failed to create user");

    assert!(created.id > 0);
    assert_eq!(new_user.id, created.id);
    assert_eq!(created.username, "george");
    assert_eq!(created.role, ROLE_USER);
    assert_eq!(created.password, "");

    let fetched = dao
        .get_user_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(fetched.username, "george");
    assert_eq!(fetched.role, ROLE_USER);
}

#[tokio::test]
async fn test_create_stores_hash_not_plaintext() {
    let db = TestDatabase::new().await;
    let dao = user_dao(&db);

    let mut new_user = User::new("hashme", "s3cret!", ROLE_USER);
    dao.create(&mut new_user).await.expect("Failed to create user");

    let stored = dao
        .get_user_by_user_name("hashme")
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_ne!(stored.password, "s3cret!");
    assert!(hasher().verify("s3cret!", &stored.password).expect("Verify failed"));
    assert!(!hasher().verify("wrong", &stored.password).expect("Verify failed"));
}

#[tokio::test]
async fn test_create_duplicate_username_fails() {
    let db = TestDatabase::new().await;
    let dao = user_dao(&db);

    dao.create(&mut User::new("dup", "a", ROLE_USER))
        .await
        .expect("Failed to create user");

    let err = dao
        .create(&mut User::new("dup", "b", ROLE_USER))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "DATABASE_ERROR");
}

#[tokio::test]
async fn test_update_rewrites_only_target_row() {
    let db = TestDatabase::new().await;
    let dao = user_dao(&db);

    let mut first = User::new("first", "pw1", ROLE_USER);
    let mut second = User::new("second", "pw2", ROLE_USER);
    let first = dao.create(&mut first).await.expect("Failed to create user");
    dao.create(&mut second).await.expect("Failed to create user");

    let changes = User {
        id: first.id,
        username: "first-renamed".to_string(),
        password: "new-password".to_string(),
        role: ROLE_ADMIN.to_string(),
    };
    let updated = dao.update(&changes).await.expect("Failed to update user");

    assert_eq!(updated.id, first.id);
    assert_eq!(updated.username, "first-renamed");
    assert_eq!(updated.role, ROLE_ADMIN);
    assert_eq!(updated.password, "");

    let untouched = dao
        .get_user_by_user_name("second")
        .await
        .expect("Query failed")
        .expect("User not found");
    assert_eq!(untouched.role, ROLE_USER);
    assert!(hasher().verify("pw2", &untouched.password).expect("Verify failed"));

    let stored = dao
        .get_user_by_id(first.id)
        .await
        .expect("Query failed")
        .expect("User not found");
    assert!(hasher().verify("new-password", &stored.password).expect("Verify failed"));
}

#[tokio::test]
async fn test_get_all() {
    let db = TestDatabase::new().await;
    let dao = user_dao(&db);

    assert!(dao.get_all().await.expect("Query failed").is_empty());

    dao.create(&mut User::new("a", "pw", ROLE_USER)).await.expect("Failed to create user");
    dao.create(&mut User::new("b", "pw", ROLE_ADMIN)).await.expect("Failed to create user");

    let mut names: Vec<String> = dao
        .get_all()
        .await
        .expect("Query failed")
        .into_iter()
        .map(|u| u.username)
        .collect();
    names.sort();
    assert_eq!(names, vec!["a", "b"]);
}

#[tokio::test]
async fn test_lookups_not_found() {
    let db = TestDatabase::new().await;
    let dao = user_dao(&db);

    assert!(dao.get_user_by_id(404).await.expect("Query failed").is_none());
    assert!(dao.get_user_by_user_name("nobody").await.expect("Query failed").is_none());
}

#[tokio::test]
async fn test_get_id_by_username_and_exists() {
    let db = TestDatabase::new().await;
    let dao = user_dao(&db);

    let created = dao
        .create(&mut User::new("george", "pw", ROLE_USER))
        .await
        .expect("Failed to create user");

    assert_eq!(dao.get_id_by_username("george").await.expect("Query failed"), created.id);
    assert_eq!(dao.get_id_by_username("nobody").await.expect("Query failed"), -1);
    assert!(dao.exists("george").await.expect("Query failed"));
    assert!(!dao.exists("nobody").await.expect("Query failed"));
}
