//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.
//!
//! Every read joins the taxonomy tables so products carry the names of their
//! category, brand and subcategory.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Product;
use crate::domain::ports::{ProductRecord, ProductRepository, ProductRepositoryError};

use super::diesel_helpers::{contains_pattern, map_basic_diesel_error, map_basic_pool_error};
use super::models::{ProductJoinRow, ProductRow, ProductWriteRow, product_from_join};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, products, sub_categories1, sub_categories2};

/// Products left-joined with their taxonomy names, ready for filtering.
macro_rules! product_listing {
    () => {
        products::table
            .left_join(categories::table.on(categories::id.eq(products::category_id)))
            .left_join(
                sub_categories1::table
                    .on(sub_categories1::id.nullable().eq(products::sub_category1_id)),
            )
            .left_join(
                sub_categories2::table
                    .on(sub_categories2::id.nullable().eq(products::sub_category2_id)),
            )
            .select((
                ProductRow::as_select(),
                categories::name.nullable(),
                sub_categories1::name.nullable(),
                sub_categories2::name.nullable(),
            ))
    };
}

/// Newest first, undated products last.
macro_rules! recency_order {
    () => {
        (products::created_at.desc().nulls_last(), products::id.desc())
    };
}

/// Diesel-backed implementation of the `ProductRepository` port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProductRepositoryError {
    map_basic_pool_error(error, ProductRepositoryError::connection)
}

fn map_diesel_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> ProductRepositoryError {
    move |error| {
        map_basic_diesel_error(
            error,
            operation,
            ProductRepositoryError::query,
            ProductRepositoryError::connection,
        )
    }
}

fn into_products(rows: Vec<ProductJoinRow>) -> Vec<Product> {
    rows.into_iter().map(product_from_join).collect()
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductJoinRow> = product_listing!()
            .order_by(recency_order!())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_all_products"))?;
        Ok(into_products(rows))
    }

    async fn list_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductJoinRow> = product_listing!()
            .filter(products::category_id.eq(category_id))
            .order_by(recency_order!())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_products_by_category"))?;
        Ok(into_products(rows))
    }

    async fn list_by_sub_category1(
        &self,
        sub_category1_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductJoinRow> = product_listing!()
            .filter(products::sub_category1_id.eq(sub_category1_id))
            .order_by(recency_order!())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_products_by_sub_category1"))?;
        Ok(into_products(rows))
    }

    async fn list_by_sub_category2(
        &self,
        sub_category2_id: i32,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductJoinRow> = product_listing!()
            .filter(products::sub_category2_id.eq(sub_category2_id))
            .order_by(recency_order!())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_products_by_sub_category2"))?;
        Ok(into_products(rows))
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, ProductRepositoryError> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.list_all().await;
        }
        let pattern = contains_pattern(trimmed);
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ProductJoinRow> = product_listing!()
            .filter(
                products::name
                    .ilike(&pattern)
                    .or(products::description.ilike(&pattern))
                    .or(categories::name.ilike(&pattern))
                    .or(sub_categories1::name.ilike(&pattern))
                    .or(sub_categories2::name.ilike(&pattern)),
            )
            .order_by(recency_order!())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("search_products"))?;
        Ok(into_products(rows))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ProductJoinRow> = product_listing!()
            .filter(products::id.eq(id))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error("find_product"))?;
        Ok(row.map(product_from_join))
    }

    async fn insert(&self, record: &ProductRecord) -> Result<Product, ProductRepositoryError> {
        let id: i32 = {
            let mut conn = self.pool.get().await.map_err(map_pool_error)?;
            diesel::insert_into(products::table)
                .values(ProductWriteRow::from(record))
                .returning(products::id)
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error("insert_product"))?
        };
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ProductRepositoryError::query("inserted product vanished"))
    }

    async fn update(&self, id: i32, record: &ProductRecord) -> Result<bool, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(products::table.find(id))
            .set(ProductWriteRow::from(record))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error("update_product"))?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, ProductRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(products::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error("delete_product"))?;
        Ok(deleted > 0)
    }
}
