//! Driven port for the three-level product taxonomy.

use async_trait::async_trait;

use crate::domain::{Category, SubCategory1, SubCategory2};

use super::define_port_error;

define_port_error! {
    /// Errors raised by taxonomy storage adapters.
    pub enum TaxonomyRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "taxonomy store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "taxonomy store query failed: {message}",
    }
}

/// Port for reading and extending the taxonomy.
///
/// Every list is ordered by name ascending. Name lookups ignore case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    /// All categories.
    async fn list_categories(&self) -> Result<Vec<Category>, TaxonomyRepositoryError>;

    /// Category by id.
    async fn find_category(&self, id: i32) -> Result<Option<Category>, TaxonomyRepositoryError>;

    /// Brands belonging to `category_id`.
    async fn list_sub_categories1(
        &self,
        category_id: i32,
    ) -> Result<Vec<SubCategory1>, TaxonomyRepositoryError>;

    /// Brand whose name equals `name` ignoring case.
    async fn find_sub_category1_by_name(
        &self,
        name: &str,
    ) -> Result<Option<SubCategory1>, TaxonomyRepositoryError>;

    /// Second-level subcategories belonging to `sub_category1_id`.
    async fn list_sub_categories2(
        &self,
        sub_category1_id: i32,
    ) -> Result<Vec<SubCategory2>, TaxonomyRepositoryError>;

    /// Every brand across all categories.
    async fn list_all_sub_categories1(&self) -> Result<Vec<SubCategory1>, TaxonomyRepositoryError>;

    /// Every second-level subcategory across all brands.
    async fn list_all_sub_categories2(&self) -> Result<Vec<SubCategory2>, TaxonomyRepositoryError>;

    /// Persist a new category and return it with its assigned id.
    async fn create_category(&self, name: &str) -> Result<Category, TaxonomyRepositoryError>;
}
