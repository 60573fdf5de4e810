//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the taxonomy, product and inbox ports backed
//! by PostgreSQL through `diesel-async` and `bb8` pooling.
//!
//! - Repository implementations only translate between Diesel rows and
//!   domain types. No business rules live here.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module.
//! - Every database failure maps onto the owning port's `connection` or
//!   `query` error.
//!
//! ```ignore
//! use storefront::outbound::persistence::{DbPool, DieselProductRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/storefront")).await?;
//! let products = DieselProductRepository::new(pool);
//! ```

mod diesel_helpers;
mod diesel_inbox_repository;
mod diesel_product_repository;
mod diesel_taxonomy_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_inbox_repository::DieselInboxRepository;
pub use diesel_product_repository::DieselProductRepository;
pub use diesel_taxonomy_repository::DieselTaxonomyRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
