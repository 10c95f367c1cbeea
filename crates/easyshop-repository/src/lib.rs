//! # EasyShop Repository
//!
//! Data access objects for the EasyShop store, one per aggregate:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn ProductDao | ProfileDao | UserDao | ShoppingCartDao>
//! MySql*Dao                      (DAO impl, MySQL via SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                        ← DatabasePool (connection provider)
//!   dao/
//!     product_dao.rs               ← ProductDao trait, ProductSearch
//!     profile_dao.rs               ← ProfileDao trait
//!     user_dao.rs                  ← UserDao trait
//!     shopping_cart_dao.rs         ← ShoppingCartDao trait
//!     impl/
//!       mysql/
//!         rows.rs                  ← shared row mappings
//!         *_dao_impl.rs            ← MySql*Dao
//! ```
//!
//! "Not found" is `Ok(None)`. Product and profile writes against a missing
//! row succeed silently, while [`ShoppingCartDao::update_item`] reports
//! [`StoreError::NoRowsAffected`](easyshop_core::StoreError::NoRowsAffected).

pub mod dao;
pub mod pool;

pub use dao::*;
pub use pool::*;
