//! DAO (Data Access Object) layer.
//!
//! Each trait is a stateless adapter over the shared connection pool. One
//! call runs one statement (two for the write paths that re-read what they
//! wrote) and maps the rows to domain objects.
//!
//! ```text
//! caller → Arc<dyn ProductDao> → MySqlProductDao → DatabasePool → MySQL
//! ```

pub mod r#impl;
pub mod product_dao;
pub mod profile_dao;
pub mod shopping_cart_dao;
pub mod user_dao;

pub use product_dao::{ProductDao, ProductSearch};
pub use profile_dao::ProfileDao;
pub use shopping_cart_dao::ShoppingCartDao;
pub use user_dao::UserDao;

pub use r#impl::{MySqlProductDao, MySqlProfileDao, MySqlShoppingCartDao, MySqlUserDao};
