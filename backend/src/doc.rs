//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every storefront, admin and health endpoint together
//! with the view schemas they return. Swagger UI serves it in debug builds
//! and `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::admin::{
    CategoryBody, CategorySavedResponse, ProductBody, ProductSavedResponse,
};
use crate::inbound::http::contact::{ContactFormBody, ContactResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::views::{
    ActionResponse, AdminListingView, AdminProductRow, BrandPageView, CategoryView,
    DashboardView, InboxMessageView, ProductDetail, ProductListItem, ProductSummaryView,
    RecentMessageView, RecentProductView, SubCategory1View, SubCategory2SampleView,
    SubCategory2View, TaxonomyRef,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront catalogue API",
        description = "Taxonomy navigation, product search, product administration and the contact inbox."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::catalogue::browse_category,
        crate::inbound::http::catalogue::browse_brand_category,
        crate::inbound::http::catalogue::browse_brand,
        crate::inbound::http::catalogue::special_offers,
        crate::inbound::http::catalogue::home_taxonomy,
        crate::inbound::http::products::search_products,
        crate::inbound::http::products::products_by_category,
        crate::inbound::http::products::filter_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::taxonomy::list_categories,
        crate::inbound::http::taxonomy::list_sub_categories1,
        crate::inbound::http::taxonomy::list_sub_categories2,
        crate::inbound::http::taxonomy::sub_category2_samples,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::admin::list_products,
        crate::inbound::http::admin::create_product,
        crate::inbound::http::admin::update_product,
        crate::inbound::http::admin::delete_product,
        crate::inbound::http::admin::create_category,
        crate::inbound::http::admin::dashboard,
        crate::inbound::http::admin::list_messages,
        crate::inbound::http::admin::mark_message_read,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ActionResponse,
        ProductListItem,
        ProductDetail,
        TaxonomyRef,
        SubCategory1View,
        SubCategory2View,
        CategoryView,
        BrandPageView,
        AdminProductRow,
        AdminListingView,
        ProductSummaryView,
        SubCategory2SampleView,
        RecentProductView,
        RecentMessageView,
        DashboardView,
        InboxMessageView,
        ProductBody,
        ProductSavedResponse,
        CategoryBody,
        CategorySavedResponse,
        ContactFormBody,
        ContactResponse,
    )),
    tags(
        (name = "catalogue", description = "Category and brand page resolution"),
        (name = "products", description = "Product search and lookup"),
        (name = "taxonomy", description = "Taxonomy pickers"),
        (name = "contact", description = "Public contact form"),
        (name = "admin", description = "Product administration, dashboard and inbox"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
