//! Storefront entry-point: loads settings, wires the store and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server, verify_brand_routes};
use storefront::inbound::http::health::HealthState;
use storefront::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use storefront::settings::StorefrontSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = StorefrontSettings::load().map_err(std::io::Error::other)?;
    let brand_routes = settings.brand_routes().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(settings.bind_addr())
        .with_brand_routes(brand_routes.clone())
        .with_contact_recipient(settings.contact_recipient());

    match settings.database_url() {
        Some(database_url) => {
            if settings.run_migrations {
                run_migrations(database_url)
                    .await
                    .map_err(std::io::Error::other)?;
            }
            let pool = DbPool::new(
                PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
            )
            .await
            .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => {
            warn!("STOREFRONT_DATABASE_URL not set; serving the in-memory catalogue");
        }
    }

    verify_brand_routes(config.store(), &brand_routes).await;

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "storefront listening");
    server.await
}
