//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{
    MockCatalogueQuery, MockContactCommand, MockDashboardQuery, MockProductCommand,
};
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; set expectations, then call [`TestPorts::into_state`].
///
/// A port left without expectations panics if a handler calls it.
#[derive(Default)]
pub struct TestPorts {
    pub catalogue: MockCatalogueQuery,
    pub products: MockProductCommand,
    pub contact: MockContactCommand,
    pub dashboard: MockDashboardQuery,
}

impl TestPorts {
    /// Freeze the mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.catalogue),
            Arc::new(self.products),
            Arc::new(self.contact),
            Arc::new(self.dashboard),
        )
    }
}
