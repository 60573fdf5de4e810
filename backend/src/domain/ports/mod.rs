//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`ContactNotifier`]) are implemented by
//! outbound adapters. Driving ports (`*Query`, `*Command`) are implemented
//! by domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_query;
mod contact_command;
mod contact_notifier;
mod dashboard_query;
mod inbox_repository;
mod product_command;
mod product_repository;
mod taxonomy_repository;

#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use contact_command::MockContactCommand;
pub use contact_command::{ContactCommand, ContactReceipt};
#[cfg(test)]
pub use contact_notifier::MockContactNotifier;
pub use contact_notifier::{ContactNotifier, ContactNotifierError};
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::{DashboardQuery, DashboardStats};
#[cfg(test)]
pub use inbox_repository::MockInboxRepository;
pub use inbox_repository::{InboxRepository, InboxRepositoryError};
#[cfg(test)]
pub use product_command::MockProductCommand;
pub use product_command::{ProductCommand, ProductDraft};
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRecord, ProductRepository, ProductRepositoryError};
#[cfg(test)]
pub use taxonomy_repository::MockTaxonomyRepository;
pub use taxonomy_repository::{TaxonomyRepository, TaxonomyRepositoryError};
