//! Back-office endpoints: product administration, dashboard and inbox.
//!
//! ```text
//! GET    /api/v1/admin/products?categoryId&subCategory1Id&subCategory2Id&searchTerm
//! POST   /api/v1/admin/products
//! PUT    /api/v1/admin/products/{id}
//! DELETE /api/v1/admin/products/{id}
//! POST   /api/v1/admin/categories
//! GET    /api/v1/admin/dashboard
//! GET    /api/v1/admin/messages
//! POST   /api/v1/admin/messages/{id}/read
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::AdminListRequest;
use crate::domain::ports::ProductDraft;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{
    ActionResponse, AdminListingView, DashboardView, Envelope, InboxMessageView, ProductDetail,
    TaxonomyRef,
};

/// Admin listing filters; zero ids mean "not selected".
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AdminListQuery {
    #[serde(default)]
    pub category_id: i32,
    #[serde(default)]
    pub sub_category1_id: i32,
    #[serde(default)]
    pub sub_category2_id: i32,
    pub search_term: Option<String>,
}

/// Product create/update payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = f64, example = 4999.0)]
    #[serde(default)]
    pub price: Decimal,
    #[schema(value_type = Option<f64>, example = 3999.0)]
    pub offer_price: Option<Decimal>,
    #[serde(default)]
    pub category_id: i32,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
    /// Data URL (`data:image/png;base64,...`) replacing the current image.
    pub image_data: Option<String>,
    /// Existing image reference; empty clears the image on update.
    pub image_url: Option<String>,
}

impl From<ProductBody> for ProductDraft {
    fn from(body: ProductBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            price: body.price,
            offer_price: body.offer_price,
            category_id: body.category_id,
            sub_category1_id: body.sub_category1_id.unwrap_or_default(),
            sub_category2_id: body.sub_category2_id.unwrap_or_default(),
            image_data: body.image_data,
            image_url: body.image_url,
        }
    }
}

/// Category create payload.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CategoryBody {
    #[serde(default)]
    pub name: String,
}

/// Acknowledgement carrying the created product.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSavedResponse {
    pub success: bool,
    pub message: String,
    pub data: ProductDetail,
}

/// Acknowledgement carrying the created category.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategorySavedResponse {
    pub success: bool,
    pub message: String,
    pub data: TaxonomyRef,
}

/// Admin product listing.
#[utoipa::path(
    get,
    path = "/api/v1/admin/products",
    params(AdminListQuery),
    responses((status = 200, description = "Admin listing", body = AdminListingView)),
    tags = ["admin"],
    operation_id = "adminListProducts"
)]
#[get("/admin/products")]
pub async fn list_products(
    state: web::Data<HttpState>,
    query: web::Query<AdminListQuery>,
) -> ApiResult<HttpResponse> {
    let AdminListQuery {
        category_id,
        sub_category1_id,
        sub_category2_id,
        search_term,
    } = query.into_inner();
    let listing = state
        .catalogue
        .admin_listing(&AdminListRequest {
            category_id,
            sub_category1_id,
            sub_category2_id,
            search_term,
        })
        .await;
    Ok(HttpResponse::Ok().json(AdminListingView::from(&listing)))
}

/// Create a product.
#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    request_body = ProductBody,
    responses(
        (status = 201, description = "Product created", body = ProductSavedResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "createProduct"
)]
#[post("/admin/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    body: web::Json<ProductBody>,
) -> ApiResult<HttpResponse> {
    let product = state
        .products
        .create_product(body.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ProductSavedResponse {
        success: true,
        message: "Product saved successfully!".to_owned(),
        data: ProductDetail::from(&product),
    }))
}

/// Update a product.
#[utoipa::path(
    put,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductBody,
    responses(
        (status = 200, description = "Product updated", body = ActionResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "Product not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "updateProduct"
)]
#[put("/admin/products/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Json<ProductBody>,
) -> ApiResult<HttpResponse> {
    state
        .products
        .update_product(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ActionResponse::ok("Product updated successfully!")))
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = ActionResponse),
        (status = 400, description = "Invalid product id", body = ErrorSchema),
        (status = 404, description = "Product not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "deleteProduct"
)]
#[delete("/admin/products/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.products.delete_product(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ActionResponse::ok("Product deleted successfully!")))
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/api/v1/admin/categories",
    request_body = CategoryBody,
    responses(
        (status = 201, description = "Category created", body = CategorySavedResponse),
        (status = 400, description = "Blank name", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "createCategory"
)]
#[post("/admin/categories")]
pub async fn create_category(
    state: web::Data<HttpState>,
    body: web::Json<CategoryBody>,
) -> ApiResult<HttpResponse> {
    let category = state
        .products
        .create_category(body.into_inner().name)
        .await?;
    Ok(HttpResponse::Created().json(CategorySavedResponse {
        success: true,
        message: "Category saved successfully!".to_owned(),
        data: TaxonomyRef::from(&category),
    }))
}

/// Dashboard counters and recent activity.
#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    responses((status = 200, description = "Dashboard", body = DashboardView)),
    tags = ["admin"],
    operation_id = "adminDashboard"
)]
#[get("/admin/dashboard")]
pub async fn dashboard(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let stats = state.dashboard.dashboard().await;
    Ok(HttpResponse::Ok().json(DashboardView::from(&stats)))
}

/// Inbox messages, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/admin/messages",
    responses(
        (status = 200, description = "`{success, data}` envelope of messages", body = [InboxMessageView])
    ),
    tags = ["admin"],
    operation_id = "adminMessages"
)]
#[get("/admin/messages")]
pub async fn list_messages(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let messages: Vec<InboxMessageView> = state
        .dashboard
        .messages()
        .await
        .iter()
        .map(InboxMessageView::from)
        .collect();
    Ok(HttpResponse::Ok().json(Envelope::ok(messages)))
}

/// Mark an inbox message as read.
#[utoipa::path(
    post,
    path = "/api/v1/admin/messages/{id}/read",
    params(("id" = i32, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message marked read", body = ActionResponse),
        (status = 404, description = "Message not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "markMessageRead"
)]
#[post("/admin/messages/{id}/read")]
pub async fn mark_message_read(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.contact.mark_read(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ActionResponse::ok("Message marked as read.")))
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
