//! Row types shared by the MySQL DAOs.
//!
//! Every read path that yields a product goes through [`ProductRow`], so a
//! product looks the same whether it comes from the catalog or a cart join.

use easyshop_core::{Product, Profile, ShoppingCart, ShoppingCartItem, User};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database row representation of a product.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct ProductRow {
    pub product_id: i32,
    pub name: String,
    pub price: Decimal,
    pub category_id: i32,
    pub description: Option<String>,
    pub subcategory: Option<String>,
    pub stock: i32,
    pub featured: bool,
    pub image_url: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            name: row.name,
            price: row.price,
            category_id: row.category_id,
            description: row.description.unwrap_or_default(),
            sub_category: row.subcategory.unwrap_or_default(),
            stock: row.stock,
            is_featured: row.featured,
            image_url: row.image_url.unwrap_or_default(),
        }
    }
}

/// A product joined with the quantity held for it (cart row or order line).
#[derive(Debug, FromRow)]
pub(crate) struct CartLineRow {
    #[sqlx(flatten)]
    pub product: ProductRow,
    pub quantity: i32,
}

impl From<CartLineRow> for ShoppingCartItem {
    fn from(row: CartLineRow) -> Self {
        Self::new(row.product.into(), row.quantity)
    }
}

/// Folds joined rows into a cart keyed by product id.
pub(crate) fn cart_from_rows(rows: Vec<CartLineRow>) -> ShoppingCart {
    rows.into_iter().map(ShoppingCartItem::from).collect()
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub user_id: i32,
    pub username: String,
    pub hashed_password: String,
    pub role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.user_id,
            username: row.username,
            password: row.hashed_password,
            role: row.role,
        }
    }
}

/// Database row representation of a profile, without its key.
#[derive(Debug, FromRow)]
pub(crate) struct ProfileRow {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl ProfileRow {
    /// Builds the profile, taking the user id from the lookup key.
    pub fn into_profile(self, user_id: i32) -> Profile {
        Profile {
            user_id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            zip: self.zip.unwrap_or_default(),
        }
    }
}
