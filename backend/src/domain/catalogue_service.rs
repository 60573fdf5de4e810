//! Catalogue resolver: turns navigation requests into view models.
//!
//! Every resolution reads through [`CatalogueReader`], so store failures
//! yield the same result as an empty store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::fail_soft::CatalogueReader;
use crate::domain::name_match::{equals_ignore_case, first_containing};
use crate::domain::ports::{CatalogueQuery, ProductRepository, TaxonomyRepository};
use crate::domain::{
    AdminListRequest, AdminListing, BrandBrowse, BrandPage, BrandRouteTable, Category,
    CategoryBrowse, CategoryViewModel, Error, Product, ProductFilter, ProductSummary, SubCategory1,
    SubCategory2, SubCategory2Sample,
};

/// Catalogue resolver implementing [`CatalogueQuery`].
pub struct CatalogueService<T, P> {
    reader: CatalogueReader<T, P>,
    brand_routes: Arc<BrandRouteTable>,
}

impl<T, P> Clone for CatalogueService<T, P> {
    fn clone(&self) -> Self {
        Self {
            reader: self.reader.clone(),
            brand_routes: Arc::clone(&self.brand_routes),
        }
    }
}

impl<T, P> CatalogueService<T, P> {
    /// Create a resolver over the given stores and brand-route table.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use storefront::domain::{BrandRouteTable, CatalogueService};
    /// # use storefront::outbound::memory::InMemoryCatalogue;
    /// let store = Arc::new(InMemoryCatalogue::default());
    /// let service = CatalogueService::new(
    ///     Arc::clone(&store),
    ///     store,
    ///     Arc::new(BrandRouteTable::default()),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(taxonomy: Arc<T>, products: Arc<P>, brand_routes: Arc<BrandRouteTable>) -> Self {
        Self {
            reader: CatalogueReader::new(taxonomy, products),
            brand_routes,
        }
    }
}

fn positive(id: Option<i32>) -> Option<i32> {
    id.filter(|value| *value > 0)
}

impl<T, P> CatalogueService<T, P>
where
    T: TaxonomyRepository,
    P: ProductRepository,
{
    async fn sub_categories2_map(
        &self,
        brands: &[SubCategory1],
        keep_empty: bool,
    ) -> BTreeMap<i32, Vec<SubCategory2>> {
        let mut map = BTreeMap::new();
        for brand in brands {
            let children = self.reader.sub_categories2(brand.id).await;
            if keep_empty || !children.is_empty() {
                map.insert(brand.id, children);
            }
        }
        map
    }

    async fn products_for_selection(
        &self,
        category_id: i32,
        sub_category1_id: Option<i32>,
        sub_category2_id: Option<i32>,
    ) -> Vec<Product> {
        if let Some(id) = sub_category2_id {
            self.reader.products_by_sub_category2(id).await
        } else if let Some(id) = sub_category1_id {
            self.reader.products_by_sub_category1(id).await
        } else {
            self.reader.products_by_category(category_id).await
        }
    }

    async fn admin_products(&self, request: &AdminListRequest) -> Vec<Product> {
        let search = request
            .search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty());
        if request.sub_category2_id > 0 {
            self.reader
                .products_by_sub_category2(request.sub_category2_id)
                .await
        } else if request.sub_category1_id > 0 {
            self.reader
                .products_by_sub_category1(request.sub_category1_id)
                .await
        } else if request.category_id > 0 {
            self.reader.products_by_category(request.category_id).await
        } else if let Some(term) = search {
            self.reader.search_products(term).await
        } else {
            self.reader.all_products().await
        }
    }
}

#[async_trait]
impl<T, P> CatalogueQuery for CatalogueService<T, P>
where
    T: TaxonomyRepository,
    P: ProductRepository,
{
    async fn browse_category(&self, request: &CategoryBrowse) -> CategoryViewModel {
        let categories = self.reader.categories().await;
        let Some(category) =
            first_containing(&categories, &request.category_name, |c| c.name.as_str())
        else {
            debug!(category_name = %request.category_name, "no category matches browse request");
            return CategoryViewModel::unmatched(request.category_name.clone());
        };

        let sub_categories1 = self.reader.sub_categories1(category.id).await;
        let sub_categories2_map = self.sub_categories2_map(&sub_categories1, true).await;
        let products = self
            .products_for_selection(
                category.id,
                request.sub_category1_id,
                request.sub_category2_id,
            )
            .await;

        CategoryViewModel {
            category_id: category.id,
            category_name: category.name.clone(),
            sub_categories1,
            sub_categories2_map,
            products,
            selected_sub_category1_id: request.sub_category1_id,
            selected_sub_category2_id: request.sub_category2_id,
        }
    }

    async fn browse_brand(&self, request: &BrandBrowse) -> Result<BrandPage, Error> {
        let route = self
            .brand_routes
            .lookup(&request.category_name)
            .ok_or_else(|| Error::not_found("Category not found"))?;
        let category = self
            .reader
            .category(route.category_id)
            .await
            .ok_or_else(|| Error::not_found("Category not found"))?;

        let sub_categories1 = self.reader.sub_categories1(category.id).await;
        let brand = request.brand_name.as_deref().and_then(|name| {
            sub_categories1
                .iter()
                .find(|brand| equals_ignore_case(&brand.name, name))
        });
        let selected_brand_id = brand.map(|b| b.id);
        let sub_categories2_map = self.sub_categories2_map(&sub_categories1, true).await;
        let products = match selected_brand_id {
            Some(id) => self.reader.products_by_sub_category1(id).await,
            None => self.reader.products_by_category(category.id).await,
        };

        Ok(BrandPage {
            view_name: self.brand_routes.view_name(&request.category_name).to_owned(),
            view: CategoryViewModel {
                category_id: category.id,
                category_name: category.name,
                sub_categories1,
                sub_categories2_map,
                products,
                selected_sub_category1_id: selected_brand_id,
                selected_sub_category2_id: None,
            },
        })
    }

    async fn admin_listing(&self, request: &AdminListRequest) -> AdminListing {
        let products = self.admin_products(request).await;
        AdminListing {
            products,
            categories: self.reader.categories().await,
            sub_categories1: self.reader.all_sub_categories1().await,
            sub_categories2: self.reader.all_sub_categories2().await,
            selected_category_id: request.category_id,
            selected_sub_category1_id: request.sub_category1_id,
            selected_sub_category2_id: request.sub_category2_id,
            search_term: request.search_term.clone(),
        }
    }

    async fn special_offers(&self) -> Vec<Product> {
        let mut offers: Vec<(Product, _)> = self
            .reader
            .all_products()
            .await
            .into_iter()
            .filter_map(|product| product.discount_ratio().map(|ratio| (product, ratio)))
            .collect();
        offers.sort_by(|(_, left), (_, right)| right.cmp(left));
        offers.into_iter().map(|(product, _)| product).collect()
    }

    async fn home_taxonomy(&self) -> Vec<CategoryViewModel> {
        let mut views = Vec::new();
        for category in self.reader.categories().await {
            let sub_categories1 = self.reader.sub_categories1(category.id).await;
            let sub_categories2_map = self.sub_categories2_map(&sub_categories1, false).await;
            views.push(CategoryViewModel {
                category_id: category.id,
                category_name: category.name,
                sub_categories1,
                sub_categories2_map,
                ..CategoryViewModel::default()
            });
        }
        views
    }

    async fn filter_products(&self, filter: &ProductFilter) -> Vec<Product> {
        self.products_for_selection(
            filter.category_id,
            positive(filter.sub_category1_id),
            positive(filter.sub_category2_id),
        )
        .await
    }

    async fn products_by_category(&self, category_id: i32) -> Vec<Product> {
        if category_id > 0 {
            self.reader.products_by_category(category_id).await
        } else {
            self.reader.all_products().await
        }
    }

    async fn search_products(&self, term: &str) -> Vec<Product> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            self.reader.all_products().await
        } else {
            self.reader.search_products(trimmed).await
        }
    }

    async fn sub_category2_samples(&self, sub_category1_id: i32) -> Vec<SubCategory2Sample> {
        let mut samples = Vec::new();
        for sub_category2 in self.reader.sub_categories2(sub_category1_id).await {
            // Listings are newest first, so the head is the most recent product.
            let product = self
                .reader
                .products_by_sub_category2(sub_category2.id)
                .await
                .first()
                .map(ProductSummary::from);
            samples.push(SubCategory2Sample {
                sub_category2_id: sub_category2.id,
                sub_category2_name: sub_category2.name,
                product,
            });
        }
        samples
    }

    async fn categories(&self) -> Vec<Category> {
        self.reader.categories().await
    }

    async fn sub_categories1(&self, category_id: i32) -> Vec<SubCategory1> {
        if category_id <= 0 {
            return Vec::new();
        }
        self.reader.sub_categories1(category_id).await
    }

    async fn sub_categories2(&self, sub_category1_id: i32) -> Vec<SubCategory2> {
        if sub_category1_id <= 0 {
            return Vec::new();
        }
        self.reader.sub_categories2(sub_category1_id).await
    }

    async fn product(&self, id: i32) -> Result<Product, Error> {
        self.reader
            .product(id)
            .await
            .ok_or_else(|| Error::not_found("Product not found"))
    }
}

#[cfg(test)]
#[path = "catalogue_service_tests.rs"]
mod tests;
