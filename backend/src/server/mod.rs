//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{CatalogueStore, ServerConfig};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use storefront::Trace;
#[cfg(debug_assertions)]
use storefront::doc::ApiDoc;
use storefront::domain::BrandRouteTable;
use storefront::inbound::http::configure_api;
use storefront::inbound::http::health::{HealthState, live, ready};
use storefront::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Compare the brand route table with the stored categories and log drift.
///
/// Returns the number of mismatched routes. A store that cannot be read is
/// logged and counted as no mismatches; the pages still render fail-soft.
pub async fn verify_brand_routes(store: &CatalogueStore, table: &BrandRouteTable) -> usize {
    let categories = match store.taxonomy().list_categories().await {
        Ok(categories) => categories,
        Err(error) => {
            warn!(%error, "brand route check skipped: categories unavailable");
            return 0;
        }
    };
    let mismatches = table.verify(&categories);
    for mismatch in &mismatches {
        warn!(%mismatch, "brand route does not match stored category");
    }
    if mismatches.is_empty() {
        info!(routes = table.routes().len(), "brand routes verified");
    }
    mismatches.len()
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
