//! Driven port for product storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::Product;

use super::define_port_error;

define_port_error! {
    /// Errors raised by product storage adapters.
    pub enum ProductRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "product store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "product store query failed: {message}",
    }
}

/// Column values written on insert and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub offer_price: Option<Decimal>,
    pub category_id: i32,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Port for reading and writing products.
///
/// Every list is ordered by `created_at` descending with undated products
/// last, and each product carries the names of its taxonomy nodes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product.
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Products in `category_id`.
    async fn list_by_category(&self, category_id: i32)
    -> Result<Vec<Product>, ProductRepositoryError>;

    /// Products attached to brand `sub_category1_id`.
    async fn list_by_sub_category1(
        &self,
        sub_category1_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Products attached to `sub_category2_id`.
    async fn list_by_sub_category2(
        &self,
        sub_category2_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Case-insensitive substring search over the product name and
    /// description and the names of its category, brand and subcategory.
    /// A blank term returns every product.
    async fn search(&self, term: &str) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Product by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ProductRepositoryError>;

    /// Insert a product and return its stored read model.
    async fn insert(&self, record: &ProductRecord) -> Result<Product, ProductRepositoryError>;

    /// Overwrite product `id`. Returns `false` when no such product exists.
    async fn update(&self, id: i32, record: &ProductRecord) -> Result<bool, ProductRepositoryError>;

    /// Delete product `id`. Returns `false` when no such product exists.
    async fn delete(&self, id: i32) -> Result<bool, ProductRepositoryError>;
}
