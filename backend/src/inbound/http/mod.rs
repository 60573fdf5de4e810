//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers translate requests into driving-port calls on [`state::HttpState`]
//! and project domain results through [`views`]. Every API route is mounted
//! under `/api/v1` by [`configure_api`]; the health probes sit at the root.

pub mod admin;
pub mod catalogue;
pub mod contact;
pub mod error;
pub mod health;
pub mod products;
pub mod schemas;
pub mod state;
pub mod taxonomy;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api/v1` handler on `cfg`.
///
/// The literal product routes are registered ahead of `/products/{id}`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(catalogue::browse_category)
            .service(catalogue::browse_brand_category)
            .service(catalogue::browse_brand)
            .service(catalogue::special_offers)
            .service(catalogue::home_taxonomy)
            .service(products::search_products)
            .service(products::products_by_category)
            .service(products::filter_products)
            .service(products::get_product)
            .service(taxonomy::list_categories)
            .service(taxonomy::list_sub_categories1)
            .service(taxonomy::list_sub_categories2)
            .service(taxonomy::sub_category2_samples)
            .service(contact::submit_contact)
            .service(admin::list_products)
            .service(admin::create_product)
            .service(admin::update_product)
            .service(admin::delete_product)
            .service(admin::create_category)
            .service(admin::dashboard)
            .service(admin::list_messages)
            .service(admin::mark_message_read),
    );
}
