//! PostgreSQL-backed `TaxonomyRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TaxonomyRepository, TaxonomyRepositoryError};
use crate::domain::{Category, SubCategory1, SubCategory2};

use super::diesel_helpers::{escape_like, map_basic_diesel_error, map_basic_pool_error};
use super::models::{CategoryRow, NewCategoryRow, SubCategory1Row, SubCategory2Row};
use super::pool::{DbPool, PoolError};
use super::schema::{categories, sub_categories1, sub_categories2};

/// Diesel-backed implementation of the `TaxonomyRepository` port.
#[derive(Clone)]
pub struct DieselTaxonomyRepository {
    pool: DbPool,
}

impl DieselTaxonomyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TaxonomyRepositoryError {
    map_basic_pool_error(error, TaxonomyRepositoryError::connection)
}

fn map_diesel_error(operation: &'static str) -> impl FnOnce(diesel::result::Error) -> TaxonomyRepositoryError {
    move |error| {
        map_basic_diesel_error(
            error,
            operation,
            TaxonomyRepositoryError::query,
            TaxonomyRepositoryError::connection,
        )
    }
}

#[async_trait]
impl TaxonomyRepository for DieselTaxonomyRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CategoryRow> = categories::table
            .select(CategoryRow::as_select())
            .order_by((categories::name.asc(), categories::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_categories"))?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<CategoryRow> = categories::table
            .find(id)
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error("find_category"))?;
        Ok(row.map(Category::from))
    }

    async fn list_sub_categories1(
        &self,
        category_id: i32,
    ) -> Result<Vec<SubCategory1>, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SubCategory1Row> = sub_categories1::table
            .filter(sub_categories1::category_id.eq(category_id))
            .select(SubCategory1Row::as_select())
            .order_by((sub_categories1::name.asc(), sub_categories1::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_sub_categories1"))?;
        Ok(rows.into_iter().map(SubCategory1::from).collect())
    }

    async fn find_sub_category1_by_name(
        &self,
        name: &str,
    ) -> Result<Option<SubCategory1>, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // ILIKE without wildcards is a case-insensitive equality test.
        let row: Option<SubCategory1Row> = sub_categories1::table
            .filter(sub_categories1::name.ilike(escape_like(name)))
            .select(SubCategory1Row::as_select())
            .order_by(sub_categories1::id.asc())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error("find_sub_category1_by_name"))?;
        Ok(row.map(SubCategory1::from))
    }

    async fn list_sub_categories2(
        &self,
        sub_category1_id: i32,
    ) -> Result<Vec<SubCategory2>, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SubCategory2Row> = sub_categories2::table
            .filter(sub_categories2::sub_category1_id.eq(sub_category1_id))
            .select(SubCategory2Row::as_select())
            .order_by((sub_categories2::name.asc(), sub_categories2::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_sub_categories2"))?;
        Ok(rows.into_iter().map(SubCategory2::from).collect())
    }

    async fn list_all_sub_categories1(&self) -> Result<Vec<SubCategory1>, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SubCategory1Row> = sub_categories1::table
            .select(SubCategory1Row::as_select())
            .order_by((sub_categories1::name.asc(), sub_categories1::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_all_sub_categories1"))?;
        Ok(rows.into_iter().map(SubCategory1::from).collect())
    }

    async fn list_all_sub_categories2(&self) -> Result<Vec<SubCategory2>, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SubCategory2Row> = sub_categories2::table
            .select(SubCategory2Row::as_select())
            .order_by((sub_categories2::name.asc(), sub_categories2::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error("list_all_sub_categories2"))?;
        Ok(rows.into_iter().map(SubCategory2::from).collect())
    }

    async fn create_category(&self, name: &str) -> Result<Category, TaxonomyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: CategoryRow = diesel::insert_into(categories::table)
            .values(&NewCategoryRow { name })
            .returning(CategoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error("create_category"))?;
        Ok(row.into())
    }
}
