//! Fail-soft read access to the taxonomy and product stores.
//!
//! Storefront pages render whatever the stores can give them. Every read
//! here collapses a store failure into an empty result (or `None`) after
//! logging it, so callers only ever see data.

use std::fmt::Display;
use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{ProductRepository, TaxonomyRepository};
use crate::domain::{Category, Product, SubCategory1, SubCategory2};

fn collapse<T: Default, E: Display>(result: Result<T, E>, operation: &str) -> T {
    result.unwrap_or_else(|error| {
        warn!(operation, %error, "catalogue store read failed; serving empty result");
        T::default()
    })
}

/// Fail-soft wrapper over the catalogue driven ports.
pub struct CatalogueReader<T, P> {
    taxonomy: Arc<T>,
    products: Arc<P>,
}

impl<T, P> Clone for CatalogueReader<T, P> {
    fn clone(&self) -> Self {
        Self {
            taxonomy: Arc::clone(&self.taxonomy),
            products: Arc::clone(&self.products),
        }
    }
}

impl<T, P> CatalogueReader<T, P> {
    /// Wrap the taxonomy and product stores.
    pub fn new(taxonomy: Arc<T>, products: Arc<P>) -> Self {
        Self { taxonomy, products }
    }
}

impl<T, P> CatalogueReader<T, P>
where
    T: TaxonomyRepository,
    P: ProductRepository,
{
    pub async fn categories(&self) -> Vec<Category> {
        collapse(self.taxonomy.list_categories().await, "list_categories")
    }

    pub async fn category(&self, id: i32) -> Option<Category> {
        collapse(self.taxonomy.find_category(id).await, "find_category")
    }

    pub async fn sub_categories1(&self, category_id: i32) -> Vec<SubCategory1> {
        collapse(
            self.taxonomy.list_sub_categories1(category_id).await,
            "list_sub_categories1",
        )
    }

    pub async fn sub_categories2(&self, sub_category1_id: i32) -> Vec<SubCategory2> {
        collapse(
            self.taxonomy.list_sub_categories2(sub_category1_id).await,
            "list_sub_categories2",
        )
    }

    pub async fn all_sub_categories1(&self) -> Vec<SubCategory1> {
        collapse(
            self.taxonomy.list_all_sub_categories1().await,
            "list_all_sub_categories1",
        )
    }

    pub async fn all_sub_categories2(&self) -> Vec<SubCategory2> {
        collapse(
            self.taxonomy.list_all_sub_categories2().await,
            "list_all_sub_categories2",
        )
    }

    pub async fn all_products(&self) -> Vec<Product> {
        collapse(self.products.list_all().await, "list_all_products")
    }

    pub async fn products_by_category(&self, category_id: i32) -> Vec<Product> {
        collapse(
            self.products.list_by_category(category_id).await,
            "list_products_by_category",
        )
    }

    pub async fn products_by_sub_category1(&self, sub_category1_id: i32) -> Vec<Product> {
        collapse(
            self.products.list_by_sub_category1(sub_category1_id).await,
            "list_products_by_sub_category1",
        )
    }

    pub async fn products_by_sub_category2(&self, sub_category2_id: i32) -> Vec<Product> {
        collapse(
            self.products.list_by_sub_category2(sub_category2_id).await,
            "list_products_by_sub_category2",
        )
    }

    pub async fn search_products(&self, term: &str) -> Vec<Product> {
        collapse(self.products.search(term).await, "search_products")
    }

    pub async fn product(&self, id: i32) -> Option<Product> {
        collapse(self.products.find_by_id(id).await, "find_product")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::fixtures::{category, product};
    use crate::domain::ports::{
        MockProductRepository, MockTaxonomyRepository, ProductRepositoryError,
        TaxonomyRepositoryError,
    };
    use rust_decimal::Decimal;

    fn reader(
        taxonomy: MockTaxonomyRepository,
        products: MockProductRepository,
    ) -> CatalogueReader<MockTaxonomyRepository, MockProductRepository> {
        CatalogueReader::new(Arc::new(taxonomy), Arc::new(products))
    }

    #[tokio::test]
    async fn passes_through_successful_reads() {
        let mut taxonomy = MockTaxonomyRepository::new();
        taxonomy
            .expect_list_categories()
            .times(1)
            .return_once(|| Ok(vec![category(1, "Abrasives")]));
        let mut products = MockProductRepository::new();
        products
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .return_once(|_| Ok(Some(product(5, "Disc", Decimal::new(10, 0), None))));

        let reader = reader(taxonomy, products);
        assert_eq!(reader.categories().await, vec![category(1, "Abrasives")]);
        assert_eq!(reader.product(5).await.map(|p| p.id), Some(5));
    }

    #[tokio::test]
    async fn collapses_connection_failures_to_empty() {
        let mut taxonomy = MockTaxonomyRepository::new();
        taxonomy
            .expect_list_sub_categories1()
            .return_once(|_| Err(TaxonomyRepositoryError::connection("refused")));
        taxonomy
            .expect_find_category()
            .return_once(|_| Err(TaxonomyRepositoryError::query("bad column")));
        let mut products = MockProductRepository::new();
        products
            .expect_search()
            .return_once(|_| Err(ProductRepositoryError::query("syntax error")));

        let reader = reader(taxonomy, products);
        assert!(reader.sub_categories1(1).await.is_empty());
        assert_eq!(reader.category(1).await, None);
        assert!(reader.search_products("drill").await.is_empty());
    }
}
