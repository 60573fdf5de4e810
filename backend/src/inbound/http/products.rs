//! Product read endpoints used by storefront scripts.
//!
//! ```text
//! GET /api/v1/products/search?searchTerm
//! GET /api/v1/products/by-category?categoryId
//! GET /api/v1/products/filter?categoryId&subCategory1Id&subCategory2Id
//! GET /api/v1/products/{id}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::ProductFilter;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{DateStyle, Envelope, ProductDetail, ProductListItem};

/// Free-text search parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term; blank or missing lists every product.
    pub search_term: Option<String>,
}

/// Category listing parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ByCategoryQuery {
    /// Category id; zero or missing lists every product.
    #[serde(default)]
    pub category_id: i32,
}

/// Storefront filter parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    #[serde(default)]
    pub category_id: i32,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
}

/// Search products by name, description or taxonomy names.
#[utoipa::path(
    get,
    path = "/api/v1/products/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "`{success, data}` envelope of matching products", body = [ProductListItem])
    ),
    tags = ["products"],
    operation_id = "searchProducts"
)]
#[get("/products/search")]
pub async fn search_products(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let term = query.into_inner().search_term.unwrap_or_default();
    let products = state.catalogue.search_products(&term).await;
    Ok(HttpResponse::Ok().json(Envelope::ok(ProductListItem::project_all(
        &products,
        DateStyle::List,
    ))))
}

/// List products in a category.
#[utoipa::path(
    get,
    path = "/api/v1/products/by-category",
    params(ByCategoryQuery),
    responses(
        (status = 200, description = "`{success, data}` envelope of products", body = [ProductListItem])
    ),
    tags = ["products"],
    operation_id = "productsByCategory"
)]
#[get("/products/by-category")]
pub async fn products_by_category(
    state: web::Data<HttpState>,
    query: web::Query<ByCategoryQuery>,
) -> ApiResult<HttpResponse> {
    let products = state
        .catalogue
        .products_by_category(query.category_id)
        .await;
    Ok(HttpResponse::Ok().json(Envelope::ok(ProductListItem::project_all(
        &products,
        DateStyle::List,
    ))))
}

/// Filter products by the most specific taxonomy selection.
#[utoipa::path(
    get,
    path = "/api/v1/products/filter",
    params(FilterQuery),
    responses(
        (status = 200, description = "`{success, data}` envelope of products", body = [ProductListItem])
    ),
    tags = ["products"],
    operation_id = "filterProducts"
)]
#[get("/products/filter")]
pub async fn filter_products(
    state: web::Data<HttpState>,
    query: web::Query<FilterQuery>,
) -> ApiResult<HttpResponse> {
    let FilterQuery {
        category_id,
        sub_category1_id,
        sub_category2_id,
    } = query.into_inner();
    let filter = ProductFilter {
        category_id,
        sub_category1_id,
        sub_category2_id,
    };
    let products = state.catalogue.filter_products(&filter).await;
    Ok(HttpResponse::Ok().json(Envelope::ok(ProductListItem::project_all(
        &products,
        DateStyle::Filter,
    ))))
}

/// Fetch one product for the edit form.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "`{success, data}` envelope of the product", body = ProductDetail),
        (status = 404, description = "Product not found", body = ErrorSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id:\\d+}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let product = state.catalogue.product(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(Envelope::ok(ProductDetail::from(&product))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::catalogue::fixtures;
    use crate::inbound::http::test_utils::TestPorts;
    use crate::test_support::fixture_timestamp;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use serde_json::Value;

    fn app(
        ports: TestPorts,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(ports.into_state())).service(
            web::scope("/api/v1")
                .service(search_products)
                .service(products_by_category)
                .service(filter_products)
                .service(get_product),
        )
    }

    #[rstest]
    #[case("/api/v1/products/search", "")]
    #[case("/api/v1/products/search?searchTerm=%20drill%20", " drill ")]
    #[actix_web::test]
    async fn search_passes_term_through(#[case] uri: &str, #[case] expected: &'static str) {
        let mut ports = TestPorts::default();
        ports
            .catalogue
            .expect_search_products()
            .withf(move |term| term == expected)
            .times(1)
            .returning(|_| Vec::new());
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"], Value::Array(Vec::new()));
    }

    #[actix_web::test]
    async fn by_category_defaults_to_zero() {
        let mut ports = TestPorts::default();
        ports
            .catalogue
            .expect_products_by_category()
            .withf(|id| *id == 0)
            .returning(|_| Vec::new());
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/products/by-category")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn filter_uses_filter_date_style() {
        let mut ports = TestPorts::default();
        ports
            .catalogue
            .expect_filter_products()
            .withf(|filter| {
                filter.category_id == 4
                    && filter.sub_category1_id == Some(10)
                    && filter.sub_category2_id.is_none()
            })
            .returning(|_| {
                let mut product = fixtures::product(1, "Drill", Decimal::new(50, 0), None);
                product.created_at = Some(fixture_timestamp());
                vec![product]
            });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/products/filter?categoryId=4&subCategory1Id=10")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["data"][0]["createdAt"], "Mar 14, 2026");
        assert_eq!(body["data"][0]["offerPrice"], Value::Null);
    }

    #[actix_web::test]
    async fn missing_product_is_404() {
        let mut ports = TestPorts::default();
        ports
            .catalogue
            .expect_product()
            .withf(|id| *id == 99)
            .returning(|_| Err(Error::not_found("Product not found")));
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/products/99")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn product_detail_is_enveloped() {
        let mut ports = TestPorts::default();
        ports.catalogue.expect_product().returning(|id| {
            Ok(fixtures::product(
                id,
                "Drill",
                Decimal::new(50, 0),
                Some(Decimal::new(45, 0)),
            ))
        });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/products/7")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["data"]["id"], 7);
        assert_eq!(body["data"]["categoryId"], 1);
        assert_eq!(body["data"]["createdAt"], "N/A");
    }
}
