//! In-memory catalogue and inbox store.
//!
//! Implements the taxonomy, product and inbox ports over plain vectors behind
//! a `tokio::sync::RwLock`. It backs integration tests and development runs
//! without `STOREFRONT_DATABASE_URL`. Orderings and matching mirror the
//! PostgreSQL adapter: taxonomy by name, products newest first with undated
//! rows last, search as a case-insensitive substring over product and
//! taxonomy names.
//!
//! [`InMemoryCatalogue::set_unavailable`] makes every call fail with a
//! connection error, which is how tests exercise the fail-soft paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::name_match::{contains_ignore_case, equals_ignore_case};
use crate::domain::ports::{
    InboxRepository, InboxRepositoryError, ProductRecord, ProductRepository,
    ProductRepositoryError, TaxonomyRepository, TaxonomyRepositoryError,
};
use crate::domain::{
    Category, InboxMessage, NewInboxMessage, Product, SubCategory1, SubCategory2,
};

const UNAVAILABLE: &str = "in-memory store marked unavailable";

#[derive(Debug, Clone)]
struct StoredProduct {
    id: i32,
    record: ProductRecord,
}

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    sub_categories1: Vec<SubCategory1>,
    sub_categories2: Vec<SubCategory2>,
    products: Vec<StoredProduct>,
    inbox: Vec<InboxMessage>,
    next_category_id: i32,
    next_product_id: i32,
    next_message_id: i32,
}

impl Tables {
    fn category_name(&self, id: i32) -> Option<String> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
    }

    fn sub_category1_name(&self, id: Option<i32>) -> Option<String> {
        let id = id?;
        self.sub_categories1
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
    }

    fn sub_category2_name(&self, id: Option<i32>) -> Option<String> {
        let id = id?;
        self.sub_categories2
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
    }

    fn hydrate(&self, stored: &StoredProduct) -> Product {
        let record = &stored.record;
        Product {
            id: stored.id,
            name: record.name.clone(),
            description: record.description.clone(),
            price: record.price,
            offer_price: record.offer_price,
            category_id: record.category_id,
            sub_category1_id: record.sub_category1_id,
            sub_category2_id: record.sub_category2_id,
            image_url: record.image_url.clone(),
            created_at: record.created_at,
            category_name: self.category_name(record.category_id),
            sub_category1_name: self.sub_category1_name(record.sub_category1_id),
            sub_category2_name: self.sub_category2_name(record.sub_category2_id),
        }
    }

    fn products_where(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        let mut selected: Vec<Product> = self
            .products
            .iter()
            .map(|stored| self.hydrate(stored))
            .filter(|product| keep(product))
            .collect();
        selected.sort_by(|a, b| recency_key(b).cmp(&recency_key(a)));
        selected
    }
}

/// `Some` dates sort above `None`, so descending order puts undated rows last.
fn recency_key(product: &Product) -> (Option<DateTime<Utc>>, i32) {
    (product.created_at, product.id)
}

fn matches_term(product: &Product, term: &str) -> bool {
    let named = |value: &Option<String>| {
        value
            .as_deref()
            .is_some_and(|name| contains_ignore_case(name, term))
    };
    contains_ignore_case(&product.name, term)
        || contains_ignore_case(&product.description, term)
        || named(&product.category_name)
        || named(&product.sub_category1_name)
        || named(&product.sub_category2_name)
}

fn sorted_by_name<T: Clone>(items: &[T], key: impl Fn(&T) -> (&str, i32)) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| key(a).cmp(&key(b)));
    sorted
}

/// Seed data for [`InMemoryCatalogue`], assembled before the store is shared.
#[derive(Debug, Default)]
pub struct CatalogueSeed {
    tables: Tables,
}

impl CatalogueSeed {
    /// Empty seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category with an explicit id.
    pub fn category(mut self, id: i32, name: &str) -> Self {
        self.tables.categories.push(Category {
            id,
            name: name.to_owned(),
        });
        self.tables.next_category_id = self.tables.next_category_id.max(id);
        self
    }

    /// Add a brand under `category_id`.
    pub fn sub_category1(mut self, id: i32, category_id: i32, name: &str) -> Self {
        self.tables.sub_categories1.push(SubCategory1 {
            id,
            name: name.to_owned(),
            category_id,
        });
        self
    }

    /// Add a second-level subcategory under `sub_category1_id`.
    pub fn sub_category2(mut self, id: i32, sub_category1_id: i32, name: &str) -> Self {
        self.tables.sub_categories2.push(SubCategory2 {
            id,
            name: name.to_owned(),
            sub_category1_id,
        });
        self
    }

    /// Add a product with an explicit id.
    pub fn product(mut self, id: i32, record: ProductRecord) -> Self {
        self.tables.products.push(StoredProduct { id, record });
        self.tables.next_product_id = self.tables.next_product_id.max(id);
        self
    }

    /// Add an inbox message with an explicit id.
    pub fn message(mut self, id: i32, message: NewInboxMessage) -> Self {
        self.tables.inbox.push(message.with_id(id));
        self.tables.next_message_id = self.tables.next_message_id.max(id);
        self
    }

    /// The four categories the default brand-route table points at.
    pub fn storefront_categories() -> Self {
        Self::new()
            .category(1, "Abrasives")
            .category(2, "Cutting Tools")
            .category(3, "Pneumatic")
            .category(4, "Power Tools")
    }
}

/// Shared in-memory implementation of the catalogue and inbox ports.
#[derive(Debug, Default)]
pub struct InMemoryCatalogue {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl InMemoryCatalogue {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated from `seed`.
    pub fn from_seed(seed: CatalogueSeed) -> Self {
        Self {
            tables: RwLock::new(seed.tables),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Toggle simulated outage; while set every port call fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn is_unavailable(&self) -> bool {
        self.unavailable.load(Ordering::SeqCst)
    }

    fn check_taxonomy(&self) -> Result<(), TaxonomyRepositoryError> {
        if self.is_unavailable() {
            return Err(TaxonomyRepositoryError::connection(UNAVAILABLE));
        }
        Ok(())
    }

    fn check_products(&self) -> Result<(), ProductRepositoryError> {
        if self.is_unavailable() {
            return Err(ProductRepositoryError::connection(UNAVAILABLE));
        }
        Ok(())
    }

    fn check_inbox(&self) -> Result<(), InboxRepositoryError> {
        if self.is_unavailable() {
            return Err(InboxRepositoryError::connection(UNAVAILABLE));
        }
        Ok(())
    }
}

#[async_trait]
impl TaxonomyRepository for InMemoryCatalogue {
    async fn list_categories(&self) -> Result<Vec<Category>, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let tables = self.tables.read().await;
        Ok(sorted_by_name(&tables.categories, |c| (c.name.as_str(), c.id)))
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_sub_categories1(
        &self,
        category_id: i32,
    ) -> Result<Vec<SubCategory1>, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let tables = self.tables.read().await;
        let mut brands: Vec<SubCategory1> = tables
            .sub_categories1
            .iter()
            .filter(|s| s.category_id == category_id)
            .cloned()
            .collect();
        brands.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));
        Ok(brands)
    }

    async fn find_sub_category1_by_name(
        &self,
        name: &str,
    ) -> Result<Option<SubCategory1>, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let tables = self.tables.read().await;
        Ok(tables
            .sub_categories1
            .iter()
            .filter(|s| equals_ignore_case(&s.name, name))
            .min_by_key(|s| s.id)
            .cloned())
    }

    async fn list_sub_categories2(
        &self,
        sub_category1_id: i32,
    ) -> Result<Vec<SubCategory2>, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let tables = self.tables.read().await;
        let mut nodes: Vec<SubCategory2> = tables
            .sub_categories2
            .iter()
            .filter(|s| s.sub_category1_id == sub_category1_id)
            .cloned()
            .collect();
        nodes.sort_by(|a, b| (a.name.as_str(), a.id).cmp(&(b.name.as_str(), b.id)));
        Ok(nodes)
    }

    async fn list_all_sub_categories1(&self) -> Result<Vec<SubCategory1>, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let tables = self.tables.read().await;
        Ok(sorted_by_name(&tables.sub_categories1, |s| (s.name.as_str(), s.id)))
    }

    async fn list_all_sub_categories2(&self) -> Result<Vec<SubCategory2>, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let tables = self.tables.read().await;
        Ok(sorted_by_name(&tables.sub_categories2, |s| (s.name.as_str(), s.id)))
    }

    async fn create_category(&self, name: &str) -> Result<Category, TaxonomyRepositoryError> {
        self.check_taxonomy()?;
        let mut tables = self.tables.write().await;
        if tables.categories.iter().any(|c| c.name == name) {
            return Err(TaxonomyRepositoryError::query(format!(
                "category {name} already exists"
            )));
        }
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            name: name.to_owned(),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalogue {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        self.check_products()?;
        let tables = self.tables.read().await;
        Ok(tables.products_where(|_| true))
    }

    async fn list_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        self.check_products()?;
        let tables = self.tables.read().await;
        Ok(tables.products_where(|p| p.category_id == category_id))
    }

    async fn list_by_sub_category1(
        &self,
        sub_category1_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        self.check_products()?;
        let tables = self.tables.read().await;
        Ok(tables.products_where(|p| p.sub_category1_id == Some(sub_category1_id)))
    }

    async fn list_by_sub_category2(
        &self,
        sub_category2_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        self.check_products()?;
        let tables = self.tables.read().await;
        Ok(tables.products_where(|p| p.sub_category2_id == Some(sub_category2_id)))
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, ProductRepositoryError> {
        self.check_products()?;
        let term = term.trim();
        let tables = self.tables.read().await;
        Ok(tables.products_where(|p| term.is_empty() || matches_term(p, term)))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ProductRepositoryError> {
        self.check_products()?;
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .iter()
            .find(|stored| stored.id == id)
            .map(|stored| tables.hydrate(stored)))
    }

    async fn insert(&self, record: &ProductRecord) -> Result<Product, ProductRepositoryError> {
        self.check_products()?;
        let mut tables = self.tables.write().await;
        tables.next_product_id += 1;
        let stored = StoredProduct {
            id: tables.next_product_id,
            record: record.clone(),
        };
        let product = tables.hydrate(&stored);
        tables.products.push(stored);
        Ok(product)
    }

    async fn update(&self, id: i32, record: &ProductRecord) -> Result<bool, ProductRepositoryError> {
        self.check_products()?;
        let mut tables = self.tables.write().await;
        match tables.products.iter_mut().find(|stored| stored.id == id) {
            Some(stored) => {
                stored.record = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, ProductRepositoryError> {
        self.check_products()?;
        let mut tables = self.tables.write().await;
        let before = tables.products.len();
        tables.products.retain(|stored| stored.id != id);
        Ok(tables.products.len() < before)
    }
}

#[async_trait]
impl InboxRepository for InMemoryCatalogue {
    async fn save(&self, message: &NewInboxMessage) -> Result<InboxMessage, InboxRepositoryError> {
        self.check_inbox()?;
        let mut tables = self.tables.write().await;
        tables.next_message_id += 1;
        let stored = message.clone().with_id(tables.next_message_id);
        tables.inbox.push(stored.clone());
        Ok(stored)
    }

    async fn list_messages(&self) -> Result<Vec<InboxMessage>, InboxRepositoryError> {
        self.check_inbox()?;
        let tables = self.tables.read().await;
        let mut messages = tables.inbox.clone();
        messages.sort_by(|a, b| (b.received_at, b.id).cmp(&(a.received_at, a.id)));
        Ok(messages)
    }

    async fn mark_read(
        &self,
        id: i32,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, InboxRepositoryError> {
        self.check_inbox()?;
        let mut tables = self.tables.write().await;
        match tables.inbox.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.unread = false;
                message.updated_at = updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests;
