//! Builders wiring repositories into the domain services behind `HttpState`.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use storefront::domain::ports::{InboxRepository, ProductRepository, TaxonomyRepository};
use storefront::domain::{CatalogueService, ContactService, DashboardService, ProductAdminService};
use storefront::inbound::http::state::HttpState;
use storefront::outbound::notify::LogContactNotifier;
use storefront::outbound::persistence::{
    DieselInboxRepository, DieselProductRepository, DieselTaxonomyRepository,
};

use super::ServerConfig;
use super::config::CatalogueStore;

/// Build the HTTP state for the configured store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.store {
        CatalogueStore::Postgres(pool) => wire_services(
            Arc::new(DieselTaxonomyRepository::new(pool.clone())),
            Arc::new(DieselProductRepository::new(pool.clone())),
            Arc::new(DieselInboxRepository::new(pool.clone())),
            config,
        ),
        CatalogueStore::Memory(store) => {
            wire_services(store.clone(), store.clone(), store.clone(), config)
        }
    };
    web::Data::new(state)
}

/// Construct every driving service over one set of driven ports.
fn wire_services<T, P, I>(
    taxonomy: Arc<T>,
    products: Arc<P>,
    inbox: Arc<I>,
    config: &ServerConfig,
) -> HttpState
where
    T: TaxonomyRepository + 'static,
    P: ProductRepository + 'static,
    I: InboxRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let notifier = Arc::new(LogContactNotifier::new(config.contact_recipient.clone()));

    let catalogue = CatalogueService::new(
        taxonomy.clone(),
        products.clone(),
        config.brand_routes.clone(),
    );
    let admin = ProductAdminService::new(taxonomy.clone(), products.clone(), clock.clone());
    let contact = ContactService::new(inbox.clone(), notifier, clock);
    let dashboard = DashboardService::new(taxonomy, products, inbox);

    HttpState::new(
        Arc::new(catalogue),
        Arc::new(admin),
        Arc::new(contact),
        Arc::new(dashboard),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use storefront::domain::ContactForm;

    fn memory_config() -> ServerConfig {
        ServerConfig::new("127.0.0.1:0".parse().expect("socket addr"))
    }

    #[rstest]
    #[tokio::test]
    async fn memory_store_serves_seeded_categories() {
        let state = build_http_state(&memory_config());

        let names: Vec<String> = state
            .catalogue
            .categories()
            .await
            .into_iter()
            .map(|category| category.name)
            .collect();

        assert_eq!(
            names,
            ["Abrasives", "Cutting Tools", "Pneumatic", "Power Tools"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn services_share_one_store() {
        let state = build_http_state(&memory_config());

        let receipt = state
            .contact
            .submit(ContactForm {
                full_name: "Asha Rao".to_owned(),
                email: "asha@example.com".to_owned(),
                phone_number: "+91 98765 43210".to_owned(),
                subject: "Quote".to_owned(),
                message: "Please call me about cutting discs.".to_owned(),
                ..ContactForm::default()
            })
            .await
            .expect("valid form");

        assert!(receipt.saved);
        let stats = state.dashboard.dashboard().await;
        assert_eq!(stats.total_emails, 1);
        assert_eq!(stats.unread_emails, 1);
        assert_eq!(stats.total_categories, 4);
    }
}
