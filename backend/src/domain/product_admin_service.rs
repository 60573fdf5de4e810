//! Product and category administration.
//!
//! Validates admin submissions before they reach the stores. Unlike the
//! storefront reads, write failures are reported to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::ports::{
    ProductCommand, ProductDraft, ProductRecord, ProductRepository, ProductRepositoryError,
    TaxonomyRepository, TaxonomyRepositoryError,
};
use crate::domain::{Category, Error, Product};

/// Upper bound on the length of an uploaded `data:` URL, in characters.
pub const MAX_IMAGE_DATA_LEN: usize = 7 * 1024 * 1024;

const ACCEPTED_IMAGE_PREFIXES: [&str; 5] = [
    "data:image/jpeg",
    "data:image/jpg",
    "data:image/png",
    "data:image/gif",
    "data:image/webp",
];

const REQUIRED_FIELDS: &str = "Please fill in all required fields.";

fn map_product_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("product store unavailable: {message}"))
        }
        ProductRepositoryError::Query { message } => {
            Error::internal(format!("product store error: {message}"))
        }
    }
}

fn map_taxonomy_error(error: TaxonomyRepositoryError) -> Error {
    match error {
        TaxonomyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("taxonomy store unavailable: {message}"))
        }
        TaxonomyRepositoryError::Query { message } => {
            Error::internal(format!("taxonomy store error: {message}"))
        }
    }
}

fn selected(id: i32) -> Option<i32> {
    (id > 0).then_some(id)
}

/// Validated uploaded image, if the draft carries one.
fn uploaded_image(draft: &ProductDraft) -> Result<Option<String>, Error> {
    let Some(data) = draft.image_data.as_deref().filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    if data.len() > MAX_IMAGE_DATA_LEN {
        return Err(Error::invalid_request("Image size should not exceed 5MB."));
    }
    if !ACCEPTED_IMAGE_PREFIXES
        .iter()
        .any(|prefix| data.starts_with(prefix))
    {
        return Err(Error::invalid_request("Invalid image format."));
    }
    Ok(Some(data.to_owned()))
}

fn validate_fields(draft: &ProductDraft) -> Result<(), Error> {
    if draft.name.trim().is_empty() || draft.category_id <= 0 || draft.price <= Decimal::ZERO {
        return Err(Error::invalid_request(REQUIRED_FIELDS));
    }
    if draft.offer_price.is_some_and(|offer| offer >= draft.price) {
        return Err(Error::invalid_request(
            "Offer price must be less than regular price.",
        ));
    }
    Ok(())
}

fn record_from(
    draft: &ProductDraft,
    image_url: Option<String>,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
) -> ProductRecord {
    ProductRecord {
        name: draft.name.trim().to_owned(),
        description: draft
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned(),
        price: draft.price,
        offer_price: draft.offer_price.filter(|offer| *offer > Decimal::ZERO),
        category_id: draft.category_id,
        sub_category1_id: selected(draft.sub_category1_id),
        sub_category2_id: selected(draft.sub_category2_id),
        image_url,
        created_at,
    }
}

/// Admin service implementing [`ProductCommand`].
#[derive(Clone)]
pub struct ProductAdminService<T, P> {
    taxonomy: Arc<T>,
    products: Arc<P>,
    clock: Arc<dyn Clock>,
}

impl<T, P> ProductAdminService<T, P> {
    /// Create a new admin service; `clock` stamps product creation times.
    pub fn new(taxonomy: Arc<T>, products: Arc<P>, clock: Arc<dyn Clock>) -> Self {
        Self {
            taxonomy,
            products,
            clock,
        }
    }
}

impl<T, P> ProductAdminService<T, P>
where
    T: TaxonomyRepository,
    P: ProductRepository,
{
    async fn existing(&self, id: i32) -> Result<Product, Error> {
        self.products
            .find_by_id(id)
            .await
            .map_err(map_product_error)?
            .ok_or_else(|| Error::not_found("Product not found."))
    }
}

#[async_trait]
impl<T, P> ProductCommand for ProductAdminService<T, P>
where
    T: TaxonomyRepository,
    P: ProductRepository,
{
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error> {
        validate_fields(&draft)?;
        let image_url = uploaded_image(&draft)?;
        let record = record_from(&draft, image_url, Some(self.clock.utc()));
        let product = self
            .products
            .insert(&record)
            .await
            .map_err(map_product_error)?;
        info!(product_id = product.id, "product created");
        Ok(product)
    }

    async fn update_product(&self, id: i32, draft: ProductDraft) -> Result<(), Error> {
        if id <= 0 {
            return Err(Error::invalid_request(REQUIRED_FIELDS));
        }
        validate_fields(&draft)?;
        let current = self.existing(id).await?;

        let image_url = match uploaded_image(&draft)? {
            Some(uploaded) => Some(uploaded),
            None if draft.image_url.as_deref().is_none_or(str::is_empty) => None,
            None => current.image_url,
        };
        let record = record_from(&draft, image_url, current.created_at);
        let found = self
            .products
            .update(id, &record)
            .await
            .map_err(map_product_error)?;
        if !found {
            return Err(Error::not_found("Product not found."));
        }
        info!(product_id = id, "product updated");
        Ok(())
    }

    async fn delete_product(&self, id: i32) -> Result<(), Error> {
        if id <= 0 {
            return Err(Error::invalid_request("Invalid product ID."));
        }
        self.existing(id).await?;
        let found = self
            .products
            .delete(id)
            .await
            .map_err(map_product_error)?;
        if !found {
            return Err(Error::not_found("Product not found."));
        }
        info!(product_id = id, "product deleted");
        Ok(())
    }

    async fn create_category(&self, name: String) -> Result<Category, Error> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_request("Category name is required."));
        }
        let category = self
            .taxonomy
            .create_category(trimmed)
            .await
            .map_err(map_taxonomy_error)?;
        info!(category_id = category.id, "category created");
        Ok(category)
    }
}

#[cfg(test)]
#[path = "product_admin_service_tests.rs"]
mod tests;
