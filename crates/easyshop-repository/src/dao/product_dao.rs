//! ProductDao trait and search criteria.

use async_trait::async_trait;
use easyshop_core::{Product, StoreResult};
use rust_decimal::Decimal;
use shaku::Interface;

/// Optional filters for [`ProductDao::search`].
///
/// An absent filter matches every row. In SQL each absent filter becomes a
/// sentinel bound into `(col = ? OR ? = sentinel)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearch {
    pub category_id: Option<i32>,
    /// Inclusive lower bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper bound.
    pub max_price: Option<Decimal>,
    pub sub_category: Option<String>,
}

impl ProductSearch {
    /// Sentinel for "any category".
    pub const ANY_CATEGORY: i32 = -1;
    /// Sentinel for "no price bound".
    pub const ANY_PRICE: Decimal = Decimal::NEGATIVE_ONE;
    /// Sentinel for "any subcategory".
    pub const ANY_SUB_CATEGORY: &'static str = "";

    /// Criteria that match every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn with_min_price(mut self, min_price: Decimal) -> Self {
        self.min_price = Some(min_price);
        self
    }

    #[must_use]
    pub fn with_max_price(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(max_price);
        self
    }

    #[must_use]
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Category filter, or the sentinel.
    #[must_use]
    pub fn category_or_any(&self) -> i32 {
        self.category_id.unwrap_or(Self::ANY_CATEGORY)
    }

    /// Lower price bound, or the sentinel.
    #[must_use]
    pub fn min_price_or_any(&self) -> Decimal {
        self.min_price.unwrap_or(Self::ANY_PRICE)
    }

    /// Upper price bound, or the sentinel.
    #[must_use]
    pub fn max_price_or_any(&self) -> Decimal {
        self.max_price.unwrap_or(Self::ANY_PRICE)
    }

    /// Subcategory filter, or the sentinel.
    #[must_use]
    pub fn sub_category_or_any(&self) -> &str {
        self.sub_category.as_deref().unwrap_or(Self::ANY_SUB_CATEGORY)
    }

    /// Evaluates the same predicate the search statement does.
    ///
    /// A filter explicitly set to its sentinel value matches everything,
    /// exactly as it does in the store.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category = self.category_or_any();
        let min_price = self.min_price_or_any();
        let max_price = self.max_price_or_any();
        let sub_category = self.sub_category_or_any();

        (product.category_id == category || category == Self::ANY_CATEGORY)
            && (product.price >= min_price || min_price == Self::ANY_PRICE)
            && (product.price <= max_price || max_price == Self::ANY_PRICE)
            && (product.sub_category == sub_category || sub_category == Self::ANY_SUB_CATEGORY)
    }
}

/// Product catalog data access.
#[async_trait]
pub trait ProductDao: Interface + Send + Sync {
    /// Lists products matching every supplied filter. Empty when nothing matches.
    async fn search(&self, criteria: &ProductSearch) -> StoreResult<Vec<Product>>;

    /// Lists products in one category.
    async fn list_by_category_id(&self, category_id: i32) -> StoreResult<Vec<Product>>;

    /// Finds a product by ID.
    async fn get_by_id(&self, product_id: i32) -> StoreResult<Option<Product>>;

    /// Inserts a product and returns it as persisted, with its store-assigned id.
    ///
    /// `None` if nothing was inserted or no id was generated.
    async fn create(&self, product: &Product) -> StoreResult<Option<Product>>;

    /// Overwrites every mutable field. A missing id is a silent no-op.
    async fn update(&self, product_id: i32, product: &Product) -> StoreResult<()>;

    /// Deletes a product. A missing id is a silent no-op.
    async fn delete(&self, product_id: i32) -> StoreResult<()>;
}
