//! Storefront navigation endpoints.
//!
//! ```text
//! GET /api/v1/catalogue/categories/{categoryName}?subCategory1Id&subCategory2Id
//! GET /api/v1/product/category/{categoryName}
//! GET /api/v1/product/category/{categoryName}/{brandName}
//! GET /api/v1/catalogue/offers
//! GET /api/v1/catalogue/home
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{BrandBrowse, CategoryBrowse};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{
    BrandPageView, CategoryView, DateStyle, Envelope, ProductListItem,
};

/// Optional subcategory selection on a category page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CategorySelection {
    /// Brand to narrow the product list to.
    pub sub_category1_id: Option<i32>,
    /// Second-level subcategory; takes precedence over the brand.
    pub sub_category2_id: Option<i32>,
}

/// Resolve a category page by name fragment.
#[utoipa::path(
    get,
    path = "/api/v1/catalogue/categories/{categoryName}",
    description = "Resolve the first category whose name contains `categoryName` (ignoring case). An unknown name yields an empty page rather than an error.",
    params(
        ("categoryName" = String, Path, description = "Category name fragment"),
        CategorySelection
    ),
    responses(
        (status = 200, description = "Resolved category page", body = CategoryView),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "browseCategory"
)]
#[get("/catalogue/categories/{category_name}")]
pub async fn browse_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    selection: web::Query<CategorySelection>,
) -> ApiResult<HttpResponse> {
    let CategorySelection {
        sub_category1_id,
        sub_category2_id,
    } = selection.into_inner();
    let request = CategoryBrowse {
        category_name: path.into_inner(),
        sub_category1_id,
        sub_category2_id,
    };
    let model = state.catalogue.browse_category(&request).await;
    Ok(HttpResponse::Ok().json(CategoryView::from(&model)))
}

async fn render_brand_page(state: &HttpState, request: BrandBrowse) -> ApiResult<HttpResponse> {
    let page = state.catalogue.browse_brand(&request).await?;
    Ok(HttpResponse::Ok().json(BrandPageView::from(&page)))
}

/// Resolve a brand-route category page without a brand selection.
#[utoipa::path(
    get,
    path = "/api/v1/product/category/{categoryName}",
    params(("categoryName" = String, Path, description = "Brand-route key, e.g. PowerTools")),
    responses(
        (status = 200, description = "Brand page", body = BrandPageView),
        (status = 404, description = "Unknown category route", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "browseBrandCategory"
)]
#[get("/product/category/{category_name}")]
pub async fn browse_brand_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let request = BrandBrowse {
        category_name: path.into_inner(),
        brand_name: None,
    };
    render_brand_page(&state, request).await
}

/// Resolve a brand-route category page with the named brand selected.
#[utoipa::path(
    get,
    path = "/api/v1/product/category/{categoryName}/{brandName}",
    description = "The brand is matched exactly, ignoring case. An unknown brand falls back to the whole category.",
    params(
        ("categoryName" = String, Path, description = "Brand-route key, e.g. PowerTools"),
        ("brandName" = String, Path, description = "Brand name")
    ),
    responses(
        (status = 200, description = "Brand page", body = BrandPageView),
        (status = 404, description = "Unknown category route", body = ErrorSchema)
    ),
    tags = ["catalogue"],
    operation_id = "browseBrand"
)]
#[get("/product/category/{category_name}/{brand_name}")]
pub async fn browse_brand(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (category_name, brand_name) = path.into_inner();
    let request = BrandBrowse {
        category_name,
        brand_name: Some(brand_name),
    };
    render_brand_page(&state, request).await
}

/// Products on offer, deepest discount first.
#[utoipa::path(
    get,
    path = "/api/v1/catalogue/offers",
    responses(
        (status = 200, description = "`{success, data}` envelope of offer products", body = [ProductListItem])
    ),
    tags = ["catalogue"],
    operation_id = "specialOffers"
)]
#[get("/catalogue/offers")]
pub async fn special_offers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let offers = state.catalogue.special_offers().await;
    Ok(HttpResponse::Ok().json(Envelope::ok(ProductListItem::project_all(
        &offers,
        DateStyle::List,
    ))))
}

/// Navigation tree for the home page.
#[utoipa::path(
    get,
    path = "/api/v1/catalogue/home",
    responses(
        (status = 200, description = "`{success, data}` envelope of category trees", body = [CategoryView])
    ),
    tags = ["catalogue"],
    operation_id = "homeTaxonomy"
)]
#[get("/catalogue/home")]
pub async fn home_taxonomy(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let views: Vec<CategoryView> = state
        .catalogue
        .home_taxonomy()
        .await
        .iter()
        .map(CategoryView::from)
        .collect();
    Ok(HttpResponse::Ok().json(Envelope::ok(views)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::fixtures;
    use crate::domain::{BrandPage, CategoryViewModel, Error};
    use crate::inbound::http::test_utils::TestPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
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
                .service(browse_category)
                .service(browse_brand_category)
                .service(browse_brand)
                .service(special_offers)
                .service(home_taxonomy),
        )
    }

    #[actix_web::test]
    async fn browse_category_forwards_selection() {
        let mut ports = TestPorts::default();
        ports
            .catalogue
            .expect_browse_category()
            .withf(|request| {
                request.category_name == "power"
                    && request.sub_category1_id == Some(10)
                    && request.sub_category2_id.is_none()
            })
            .times(1)
            .returning(|request| CategoryViewModel {
                category_id: 4,
                category_name: "Power Tools".to_owned(),
                selected_sub_category1_id: request.sub_category1_id,
                ..CategoryViewModel::default()
            });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/catalogue/categories/power?subCategory1Id=10")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["categoryId"], 4);
        assert_eq!(body["selectedSubCategory1Id"], 10);
        assert_eq!(body["selectedSubCategory2Id"], Value::Null);
    }

    #[actix_web::test]
    async fn unknown_brand_route_is_404() {
        let mut ports = TestPorts::default();
        ports
            .catalogue
            .expect_browse_brand()
            .returning(|_| Err(Error::not_found("Category not found")));
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/product/category/Garden/Acme")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "not_found");
    }

    #[actix_web::test]
    async fn brand_page_carries_view_name() {
        let mut ports = TestPorts::default();
        ports
            .catalogue
            .expect_browse_brand()
            .withf(|request| {
                request.category_name == "PowerTools"
                    && request.brand_name.as_deref() == Some("makita")
            })
            .returning(|_| {
                Ok(BrandPage {
                    view_name: "PowerTools".to_owned(),
                    view: CategoryViewModel {
                        category_id: 4,
                        category_name: "Power Tools".to_owned(),
                        ..CategoryViewModel::default()
                    },
                })
            });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/product/category/PowerTools/makita")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["viewName"], "PowerTools");
        assert_eq!(body["view"]["categoryName"], "Power Tools");
    }

    #[actix_web::test]
    async fn offers_are_enveloped() {
        let mut ports = TestPorts::default();
        ports.catalogue.expect_special_offers().returning(|| {
            vec![fixtures::product(
                3,
                "Flap Disc",
                Decimal::new(100, 0),
                Some(Decimal::new(60, 0)),
            )]
        });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/catalogue/offers")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["id"], 3);
        assert_eq!(body["data"][0]["createdAt"], "N/A");
    }

    #[actix_web::test]
    async fn home_taxonomy_lists_categories() {
        let mut ports = TestPorts::default();
        ports.catalogue.expect_home_taxonomy().returning(|| {
            vec![CategoryViewModel {
                category_id: 1,
                category_name: "Abrasives".to_owned(),
                sub_categories1: vec![fixtures::brand(12, "Norton", 1)],
                ..CategoryViewModel::default()
            }]
        });
        let app = actix_test::init_service(app(ports)).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/catalogue/home")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;

        assert_eq!(body["data"][0]["subCategories1"][0]["name"], "Norton");
    }
}
