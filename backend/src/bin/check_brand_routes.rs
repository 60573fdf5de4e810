//! Compare the brand route table with the categories in the store.
//!
//! Exits non-zero when any route points at a missing or renamed category.
//!
//! # Examples
//! ```sh
//! cargo run --bin check-brand-routes -- --routes config/brand_routes.json
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use storefront::domain::BrandRouteTable;
use storefront::domain::ports::TaxonomyRepository;
use storefront::outbound::memory::{CatalogueSeed, InMemoryCatalogue};
use storefront::outbound::persistence::{DbPool, DieselTaxonomyRepository, PoolConfig};
use tokio::runtime::Builder;

/// `check-brand-routes` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "check-brand-routes",
    about = "Verify brand route segments against stored category names",
    version
)]
struct CliArgs {
    /// JSON route table; the built-in table is checked when omitted.
    #[arg(long = "routes", value_name = "path")]
    routes: Option<PathBuf>,
    /// Database connection URL. Falls back to `STOREFRONT_DATABASE_URL`;
    /// without either the seeded in-memory categories are used.
    #[arg(long = "database-url", value_name = "url", env = "STOREFRONT_DATABASE_URL")]
    database_url: Option<String>,
}

fn load_table(path: Option<&PathBuf>) -> Result<BrandRouteTable> {
    let Some(path) = path else {
        return Ok(BrandRouteTable::default());
    };
    let document = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("read brand routes from {}", path.display()))?;
    BrandRouteTable::from_json(&document)
        .wrap_err_with(|| format!("parse brand routes in {}", path.display()))
}

async fn taxonomy(database_url: Option<&str>) -> Result<Arc<dyn TaxonomyRepository>> {
    match database_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url).with_max_size(1))
                .await
                .wrap_err("connect to database")?;
            Ok(Arc::new(DieselTaxonomyRepository::new(pool)))
        }
        None => Ok(Arc::new(InMemoryCatalogue::from_seed(
            CatalogueSeed::storefront_categories(),
        ))),
    }
}

async fn run(args: CliArgs) -> Result<usize> {
    let table = load_table(args.routes.as_ref())?;
    let categories = taxonomy(args.database_url.as_deref())
        .await?
        .list_categories()
        .await
        .wrap_err("list categories")?;

    let mismatches = table.verify(&categories);
    for route in table.routes() {
        let status = if mismatches.iter().any(|m| m.route() == route.category_name) {
            "MISMATCH"
        } else {
            "ok"
        };
        println!("{status:<8} {} -> {}", route.category_name, route.category_id);
    }
    for mismatch in &mismatches {
        eprintln!("{mismatch}");
    }
    Ok(mismatches.len())
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    let mismatches = runtime.block_on(run(args))?;
    Ok(if mismatches == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
