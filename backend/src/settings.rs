//! Server configuration loaded via OrthoConfig.
//!
//! Values come from `STOREFRONT_*` environment variables, command-line
//! flags or a configuration file. Without a database URL the server runs
//! against the seeded in-memory store.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{BrandRouteTable, BrandRouteTableError};
use crate::outbound::notify::DEFAULT_RECIPIENT;
use crate::outbound::persistence::DEFAULT_MAX_SIZE;

const DEFAULT_PORT: u16 = 8080;

/// Errors raised while loading the brand route table.
#[derive(Debug, thiserror::Error)]
pub enum BrandRoutesLoadError {
    #[error("failed to read brand routes from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid brand routes in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: BrandRouteTableError,
    },
}

/// Storefront server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// PostgreSQL connection string; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Interface to listen on.
    pub host: Option<IpAddr>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
    /// JSON brand route table replacing the built-in one.
    pub brand_routes_path: Option<PathBuf>,
    /// Address contact notifications are sent to.
    pub contact_recipient: Option<String>,
}

impl StorefrontSettings {
    /// Socket address to bind, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured pool size or [`DEFAULT_MAX_SIZE`].
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Configured recipient or [`DEFAULT_RECIPIENT`].
    pub fn contact_recipient(&self) -> &str {
        self.contact_recipient
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_RECIPIENT)
    }

    /// Database URL with blank values treated as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|value| !value.trim().is_empty())
    }

    /// Load the configured brand route table, or the built-in one.
    pub fn brand_routes(&self) -> Result<BrandRouteTable, BrandRoutesLoadError> {
        let Some(path) = &self.brand_routes_path else {
            return Ok(BrandRouteTable::default());
        };
        let document =
            std::fs::read_to_string(path).map_err(|source| BrandRoutesLoadError::Read {
                path: path.clone(),
                source,
            })?;
        BrandRouteTable::from_json(&document).map_err(|source| BrandRoutesLoadError::Parse {
            path: path.clone(),
            source,
        })
    }
}
