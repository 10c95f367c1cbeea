//! Product entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier. Ignored on insert.
    pub product_id: i32,
    pub name: String,
    /// Unit price as an exact decimal.
    pub price: Decimal,
    pub category_id: i32,
    pub description: String,
    pub sub_category: String,
    /// Units in stock.
    pub stock: i32,
    pub is_featured: bool,
    pub image_url: String,
}

impl Product {
    /// Creates a product with every field supplied.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        product_id: i32,
        name: impl Into<String>,
        price: Decimal,
        category_id: i32,
        description: impl Into<String>,
        sub_category: impl Into<String>,
        stock: i32,
        is_featured: bool,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            category_id,
            description: description.into(),
            sub_category: sub_category.into(),
            stock,
            is_featured,
            image_url: image_url.into(),
        }
    }
}
