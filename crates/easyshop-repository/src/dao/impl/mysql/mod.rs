//! MySQL / SQLx DAO implementations.

mod product_dao_impl;
mod profile_dao_impl;
mod rows;
mod shopping_cart_dao_impl;
mod user_dao_impl;

pub use product_dao_impl::MySqlProductDao;
pub use profile_dao_impl::MySqlProfileDao;
pub use shopping_cart_dao_impl::MySqlShoppingCartDao;
pub use user_dao_impl::MySqlUserDao;
