//! # EasyShop Domain
//!
//! Plain domain objects produced and consumed by the data access layer.

pub mod product;
pub mod profile;
pub mod shopping_cart;
pub mod user;

pub use product::*;
pub use profile::*;
pub use shopping_cart::*;
pub use user::*;
