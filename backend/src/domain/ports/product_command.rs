//! Driving port for product and category administration.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{Category, Error, Product};

/// Admin-submitted product fields.
///
/// `image_data` carries a freshly uploaded `data:image/...` URL;
/// `image_url` echoes the image the form is currently showing, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub offer_price: Option<Decimal>,
    pub category_id: i32,
    pub sub_category1_id: i32,
    pub sub_category2_id: i32,
    pub image_data: Option<String>,
    pub image_url: Option<String>,
}

/// Product administration use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommand: Send + Sync {
    /// Validate and store a new product.
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error>;

    /// Validate and overwrite product `id`, keeping its creation time.
    async fn update_product(&self, id: i32, draft: ProductDraft) -> Result<(), Error>;

    /// Remove product `id`.
    async fn delete_product(&self, id: i32) -> Result<(), Error>;

    /// Store a new category named `name`.
    async fn create_category(&self, name: String) -> Result<Category, Error>;
}
