//! Driven port announcing new contact submissions to the shop owner.

use async_trait::async_trait;

use crate::domain::ContactNotification;

use super::define_port_error;

define_port_error! {
    /// Errors raised while delivering a contact notification.
    pub enum ContactNotifierError {
        /// Delivery transport rejected or dropped the notification.
        Delivery { message: String } =>
            "contact notification delivery failed: {message}",
    }
}

/// Fire-and-forget notification sink.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Deliver `notification`.
    async fn notify(&self, notification: &ContactNotification) -> Result<(), ContactNotifierError>;
}
