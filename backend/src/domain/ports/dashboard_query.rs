//! Driving port for the admin dashboard.

use async_trait::async_trait;

use crate::domain::{InboxMessage, Product};

/// Admin dashboard aggregate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_categories: usize,
    pub total_emails: usize,
    pub unread_emails: usize,
    pub contact_forms: usize,
    /// Five most recent products.
    pub recent_products: Vec<Product>,
    /// Five most recent unread messages.
    pub recent_messages: Vec<InboxMessage>,
}

/// Dashboard and inbox read use-cases. Store failures read as empty.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardQuery: Send + Sync {
    /// Counts and recency slices over products and messages.
    async fn dashboard(&self) -> DashboardStats;

    /// Every inbox message, most recent first.
    async fn messages(&self) -> Vec<InboxMessage>;
}
