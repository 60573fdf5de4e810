//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use storefront::domain::BrandRouteTable;
use storefront::domain::ports::TaxonomyRepository;
use storefront::outbound::memory::{CatalogueSeed, InMemoryCatalogue};
use storefront::outbound::notify::DEFAULT_RECIPIENT;
use storefront::outbound::persistence::{DbPool, DieselTaxonomyRepository};

/// Backing store the driven ports are wired against.
#[derive(Clone)]
pub enum CatalogueStore {
    /// PostgreSQL through the Diesel repositories.
    Postgres(DbPool),
    /// Process-local store seeded with the storefront categories.
    Memory(Arc<InMemoryCatalogue>),
}

impl CatalogueStore {
    /// In-memory store holding the categories the built-in brand routes use.
    pub fn seeded_memory() -> Self {
        Self::Memory(Arc::new(InMemoryCatalogue::from_seed(
            CatalogueSeed::storefront_categories(),
        )))
    }

    /// Taxonomy port over this store.
    pub fn taxonomy(&self) -> Arc<dyn TaxonomyRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(DieselTaxonomyRepository::new(pool.clone())),
            Self::Memory(store) => store.clone(),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: CatalogueStore,
    pub(crate) brand_routes: Arc<BrandRouteTable>,
    pub(crate) contact_recipient: String,
}

impl ServerConfig {
    /// Configuration serving the seeded in-memory store on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            store: CatalogueStore::seeded_memory(),
            brand_routes: Arc::new(BrandRouteTable::default()),
            contact_recipient: DEFAULT_RECIPIENT.to_owned(),
        }
    }

    /// Serve from PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.store = CatalogueStore::Postgres(pool);
        self
    }

    /// Replace the built-in brand route table.
    #[must_use]
    pub fn with_brand_routes(mut self, table: BrandRouteTable) -> Self {
        self.brand_routes = Arc::new(table);
        self
    }

    /// Address contact notifications to `recipient`.
    #[must_use]
    pub fn with_contact_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.contact_recipient = recipient.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the configured backing store.
    #[must_use]
    pub fn store(&self) -> &CatalogueStore {
        &self.store
    }
}
