//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CatalogueQuery, ContactCommand, DashboardQuery, ProductCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn CatalogueQuery>,
    pub products: Arc<dyn ProductCommand>,
    pub contact: Arc<dyn ContactCommand>,
    pub dashboard: Arc<dyn DashboardQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// ```ignore
    /// let state = HttpState::new(catalogue, products, contact, dashboard);
    /// let app = App::new().app_data(web::Data::new(state));
    /// ```
    pub fn new(
        catalogue: Arc<dyn CatalogueQuery>,
        products: Arc<dyn ProductCommand>,
        contact: Arc<dyn ContactCommand>,
        dashboard: Arc<dyn DashboardQuery>,
    ) -> Self {
        Self {
            catalogue,
            products,
            contact,
            dashboard,
        }
    }
}
