//! Shopping cart aggregate.

use super::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product paired with the quantity held in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCartItem {
    pub product: Product,
    pub quantity: i32,
}

impl ShoppingCartItem {
    /// Creates an item for a product.
    #[must_use]
    pub const fn new(product: Product, quantity: i32) -> Self {
        Self { product, quantity }
    }

    /// Identifier of the carried product.
    #[must_use]
    pub const fn product_id(&self) -> i32 {
        self.product.product_id
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Items keyed by product identifier. A product appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShoppingCart {
    items: HashMap<i32, ShoppingCartItem>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, replacing any item already held for the same product.
    pub fn add(&mut self, item: ShoppingCartItem) {
        self.items.insert(item.product_id(), item);
    }

    #[must_use]
    pub fn contains(&self, product_id: i32) -> bool {
        self.items.contains_key(&product_id)
    }

    #[must_use]
    pub fn get(&self, product_id: i32) -> Option<&ShoppingCartItem> {
        self.items.get(&product_id)
    }

    /// Items keyed by product identifier.
    #[must_use]
    pub const fn items(&self) -> &HashMap<i32, ShoppingCartItem> {
        &self.items
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price times quantity over every item.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.values().map(ShoppingCartItem::line_total).sum()
    }
}

impl FromIterator<ShoppingCartItem> for ShoppingCart {
    fn from_iter<I: IntoIterator<Item = ShoppingCartItem>>(iter: I) -> Self {
        let mut cart = Self::new();
        for item in iter {
            cart.add(item);
        }
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, price: Decimal) -> Product {
        Product {
            product_id: id,
            name: format!("product-{id}"),
            price,
            ..Product::default()
        }
    }

    #[test]
    fn test_total_of_two_items() {
        let cart: ShoppingCart = vec![
            ShoppingCartItem::new(product(1, Decimal::new(999, 2)), 2),
            ShoppingCartItem::new(product(2, Decimal::new(500, 2)), 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.total(), Decimal::new(2498, 2));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = ShoppingCart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_add_same_product_keeps_one_item() {
        let mut cart = ShoppingCart::new();
        cart.add(ShoppingCartItem::new(product(3, Decimal::ONE), 1));
        cart.add(ShoppingCartItem::new(product(3, Decimal::ONE), 4));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(3).map(|i| i.quantity), Some(4));
    }

    #[test]
    fn test_contains() {
        let mut cart = ShoppingCart::new();
        cart.add(ShoppingCartItem::new(product(5, Decimal::TEN), 1));

        assert!(cart.contains(5));
        assert!(!cart.contains(6));
    }

    #[test]
    fn test_line_total() {
        let item = ShoppingCartItem::new(product(1, Decimal::new(1250, 2)), 3);
        assert_eq!(item.line_total(), Decimal::new(3750, 2));
    }
}
