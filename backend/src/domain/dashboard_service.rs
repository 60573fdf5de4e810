//! Admin dashboard aggregation over products, categories and the inbox.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::InboxMessage;
use crate::domain::fail_soft::CatalogueReader;
use crate::domain::ports::{
    DashboardQuery, DashboardStats, InboxRepository, ProductRepository, TaxonomyRepository,
};

const RECENT_LIMIT: usize = 5;

/// Dashboard service implementing [`DashboardQuery`].
pub struct DashboardService<T, P, I> {
    catalogue: CatalogueReader<T, P>,
    inbox: Arc<I>,
}

impl<T, P, I> Clone for DashboardService<T, P, I> {
    fn clone(&self) -> Self {
        Self {
            catalogue: self.catalogue.clone(),
            inbox: Arc::clone(&self.inbox),
        }
    }
}

impl<T, P, I> DashboardService<T, P, I> {
    /// Create a new dashboard service.
    pub fn new(taxonomy: Arc<T>, products: Arc<P>, inbox: Arc<I>) -> Self {
        Self {
            catalogue: CatalogueReader::new(taxonomy, products),
            inbox,
        }
    }
}

#[async_trait]
impl<T, P, I> DashboardQuery for DashboardService<T, P, I>
where
    T: TaxonomyRepository,
    P: ProductRepository,
    I: InboxRepository,
{
    async fn dashboard(&self) -> DashboardStats {
        let products = self.catalogue.all_products().await;
        let categories = self.catalogue.categories().await;
        let messages = self.messages().await;

        DashboardStats {
            total_products: products.len(),
            total_categories: categories.len(),
            total_emails: messages.len(),
            unread_emails: messages.iter().filter(|m| m.unread).count(),
            contact_forms: messages.iter().filter(|m| m.is_contact_form).count(),
            recent_products: products.into_iter().take(RECENT_LIMIT).collect(),
            recent_messages: messages
                .into_iter()
                .filter(|m| m.unread)
                .take(RECENT_LIMIT)
                .collect(),
        }
    }

    async fn messages(&self) -> Vec<InboxMessage> {
        self.inbox.list_messages().await.unwrap_or_else(|error| {
            warn!(%error, "inbox read failed; serving empty result");
            Vec::new()
        })
    }
}
