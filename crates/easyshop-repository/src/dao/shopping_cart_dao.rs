//! ShoppingCartDao trait.

use async_trait::async_trait;
use easyshop_core::{ShoppingCart, ShoppingCartItem, StoreResult};
use rust_decimal::Decimal;
use shaku::Interface;

/// Shopping cart data access.
///
/// Unlike product updates, [`update_item`](Self::update_item) on a missing
/// row is an error.
#[async_trait]
pub trait ShoppingCartDao: Interface + Send + Sync {
    /// Loads the live cart of a user. Empty when the user has no rows.
    async fn get_by_user_id(&self, user_id: i32) -> StoreResult<ShoppingCart>;

    /// Rebuilds a cart-shaped view of a past order's line items.
    async fn get_by_order_id(&self, order_id: i32) -> StoreResult<ShoppingCart>;

    /// Adds one unit of the item's product, inserting at quantity 1 or
    /// incrementing an existing row, then returns the reloaded cart.
    async fn add_item(&self, user_id: i32, item: &ShoppingCartItem) -> StoreResult<ShoppingCart>;

    /// Sets the quantity of an existing cart row.
    ///
    /// Fails with `StoreError::NoRowsAffected` when the row does not exist.
    async fn update_item(&self, user_id: i32, item: &ShoppingCartItem) -> StoreResult<()>;

    /// Removes every row of the user's cart. No-op when already empty.
    async fn delete_shopping_cart(&self, user_id: i32) -> StoreResult<()>;

    /// Sum of price times quantity. Does not touch the store.
    fn get_shopping_cart_total(&self, cart: &ShoppingCart) -> Decimal {
        cart.total()
    }
}
