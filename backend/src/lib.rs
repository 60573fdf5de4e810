//! Storefront catalogue backend.
//!
//! Resolves hierarchical category, brand and subcategory requests against a
//! product taxonomy, administers products, and records contact form
//! submissions. The crate follows a ports-and-adapters layout:
//! [`domain`] holds entities, services and ports; [`inbound`] exposes them
//! over HTTP; [`outbound`] implements the ports against PostgreSQL, memory
//! and the notification log.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::trace::Trace;

#[cfg(test)]
pub(crate) mod test_support;
