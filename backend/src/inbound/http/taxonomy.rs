//! Taxonomy picker endpoints.
//!
//! ```text
//! GET /api/v1/taxonomy/categories
//! GET /api/v1/taxonomy/categories/{id}/sub-categories
//! GET /api/v1/taxonomy/sub-categories/{id}/sub-categories
//! GET /api/v1/taxonomy/sub-categories/{id}/samples
//! ```

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{Envelope, SubCategory2SampleView, TaxonomyRef};

/// Every category as `{id, name}`.
#[utoipa::path(
    get,
    path = "/api/v1/taxonomy/categories",
    responses(
        (status = 200, description = "`{success, data}` envelope of categories", body = [TaxonomyRef])
    ),
    tags = ["taxonomy"],
    operation_id = "listCategories"
)]
#[get("/taxonomy/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let nodes: Vec<TaxonomyRef> = state
        .catalogue
        .categories()
        .await
        .iter()
        .map(TaxonomyRef::from)
        .collect();
    Ok(HttpResponse::Ok().json(Envelope::ok(nodes)))
}

/// Brands under a category; empty for non-positive ids.
#[utoipa::path(
    get,
    path = "/api/v1/taxonomy/categories/{id}/sub-categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "`{success, data}` envelope of brands", body = [TaxonomyRef])
    ),
    tags = ["taxonomy"],
    operation_id = "listSubCategories1"
)]
#[get("/taxonomy/categories/{id}/sub-categories")]
pub async fn list_sub_categories1(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let nodes: Vec<TaxonomyRef> = state
        .catalogue
        .sub_categories1(path.into_inner())
        .await
        .iter()
        .map(TaxonomyRef::from)
        .collect();
    Ok(HttpResponse::Ok().json(Envelope::ok(nodes)))
}

/// Second-level subcategories under a brand; empty for non-positive ids.
#[utoipa::path(
    get,
    path = "/api/v1/taxonomy/sub-categories/{id}/sub-categories",
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "`{success, data}` envelope of subcategories", body = [TaxonomyRef])
    ),
    tags = ["taxonomy"],
    operation_id = "listSubCategories2"
)]
#[get("/taxonomy/sub-categories/{id}/sub-categories")]
pub async fn list_sub_categories2(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let nodes: Vec<TaxonomyRef> = state
        .catalogue
        .sub_categories2(path.into_inner())
        .await
        .iter()
        .map(TaxonomyRef::from)
        .collect();
    Ok(HttpResponse::Ok().json(Envelope::ok(nodes)))
}

/// One sample product per second-level subcategory under a brand.
#[utoipa::path(
    get,
    path = "/api/v1/taxonomy/sub-categories/{id}/samples",
    params(("id" = i32, Path, description = "Brand id")),
    responses(
        (status = 200, description = "`{success, data}` envelope of samples", body = [SubCategory2SampleView])
    ),
    tags = ["taxonomy"],
    operation_id = "subCategory2Samples"
)]
#[get("/taxonomy/sub-categories/{id}/samples")]
pub async fn sub_category2_samples(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let samples: Vec<SubCategory2SampleView> = state
        .catalogue
        .sub_category2_samples(path.into_inner())
        .await
        .iter()
        .map(SubCategory2SampleView::from)
        .collect();
    Ok(HttpResponse::Ok().json(Envelope::ok(samples)))
}
