//! Driven port for the message inbox.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{InboxMessage, NewInboxMessage};

use super::define_port_error;

define_port_error! {
    /// Errors raised by inbox storage adapters.
    pub enum InboxRepositoryError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "inbox store connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "inbox store query failed: {message}",
    }
}

/// Port for storing and reading inbox messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InboxRepository: Send + Sync {
    /// Store a message and return it with its assigned id.
    async fn save(&self, message: &NewInboxMessage) -> Result<InboxMessage, InboxRepositoryError>;

    /// Every message, most recently received first.
    async fn list_messages(&self) -> Result<Vec<InboxMessage>, InboxRepositoryError>;

    /// Clear the unread flag on message `id`, stamping `updated_at`.
    /// Returns `false` when no such message exists.
    async fn mark_read(
        &self,
        id: i32,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, InboxRepositoryError>;
}
