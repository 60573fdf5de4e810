//! Driving port for catalogue navigation.
//!
//! Every operation except [`CatalogueQuery::browse_brand`] and
//! [`CatalogueQuery::product`] is infallible: store failures surface as empty
//! results, so a caller cannot tell an outage from an empty catalogue.

use async_trait::async_trait;

use crate::domain::{
    AdminListRequest, AdminListing, BrandBrowse, BrandPage, Category, CategoryBrowse,
    CategoryViewModel, Error, Product, ProductFilter, SubCategory1, SubCategory2,
    SubCategory2Sample,
};

/// Catalogue resolution use-cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Resolve a category page from a case-insensitive name fragment.
    async fn browse_category(&self, request: &CategoryBrowse) -> CategoryViewModel;

    /// Resolve a brand page through the configured brand-route table.
    ///
    /// Fails with `not_found` when the category name is not a known route or
    /// its category no longer exists.
    async fn browse_brand(&self, request: &BrandBrowse) -> Result<BrandPage, Error>;

    /// Admin product listing with unscoped taxonomy pickers.
    async fn admin_listing(&self, request: &AdminListRequest) -> AdminListing;

    /// Special offers, deepest discount first.
    async fn special_offers(&self) -> Vec<Product>;

    /// Navigation tree for the home page; brands without subcategories are
    /// left out of each category's subcategory map.
    async fn home_taxonomy(&self) -> Vec<CategoryViewModel>;

    /// Storefront filter, most specific selection first.
    async fn filter_products(&self, filter: &ProductFilter) -> Vec<Product>;

    /// Products in `category_id`, or every product when `category_id <= 0`.
    async fn products_by_category(&self, category_id: i32) -> Vec<Product>;

    /// Free-text search; a blank term returns every product.
    async fn search_products(&self, term: &str) -> Vec<Product>;

    /// One sample per second-level subcategory under a brand.
    ///
    /// The sample is the most recently created product in that subcategory,
    /// or absent when it has none.
    async fn sub_category2_samples(&self, sub_category1_id: i32) -> Vec<SubCategory2Sample>;

    /// Every category.
    async fn categories(&self) -> Vec<Category>;

    /// Brands under `category_id`; empty when `category_id <= 0`.
    async fn sub_categories1(&self, category_id: i32) -> Vec<SubCategory1>;

    /// Subcategories under `sub_category1_id`; empty when the id is `<= 0`.
    async fn sub_categories2(&self, sub_category1_id: i32) -> Vec<SubCategory2>;

    /// Single product; `not_found` when absent.
    async fn product(&self, id: i32) -> Result<Product, Error>;
}
