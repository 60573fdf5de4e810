//! Contact notification adapter that emits notifications as log events.
//!
//! Mail transport is deployment-specific; this adapter records each
//! notification on the `storefront::contact` target so an external log
//! shipper or mail relay can pick it up.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ContactNotification;
use crate::domain::ports::{ContactNotifier, ContactNotifierError};

/// Recipient used when none is configured.
pub const DEFAULT_RECIPIENT: &str = "sales@localhost";

/// Writes each contact notification as a structured `info` event.
#[derive(Debug, Clone)]
pub struct LogContactNotifier {
    recipient: String,
}

impl LogContactNotifier {
    /// Notifier addressing `recipient`.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    /// Configured recipient address.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Default for LogContactNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT)
    }
}

#[async_trait]
impl ContactNotifier for LogContactNotifier {
    async fn notify(&self, notification: &ContactNotification) -> Result<(), ContactNotifierError> {
        if notification.reply_to.trim().is_empty() {
            return Err(ContactNotifierError::delivery("missing reply-to address"));
        }
        info!(
            target: "storefront::contact",
            to = %self.recipient,
            reply_to = %notification.reply_to,
            reply_to_name = %notification.reply_to_name,
            reference_id = %notification.reference_id,
            subject = %notification.subject,
            body = %notification.body,
            "contact notification"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn notification() -> ContactNotification {
        ContactNotification {
            reference_id: "ref-1".to_owned(),
            subject: "Contact Form: Asha Rao <asha@example.com>".to_owned(),
            reply_to: "asha@example.com".to_owned(),
            reply_to_name: "Asha Rao".to_owned(),
            body: "Need forty discs".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn delivers_addressed_notifications(notification: ContactNotification) {
        let notifier = LogContactNotifier::default();
        assert_eq!(notifier.recipient(), DEFAULT_RECIPIENT);
        notifier.notify(&notification).await.expect("delivered");
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_notifications_without_reply_to(mut notification: ContactNotification) {
        notification.reply_to = " ".to_owned();
        let err = LogContactNotifier::new("owner@shop.test")
            .notify(&notification)
            .await
            .expect_err("rejected");
        assert!(matches!(err, ContactNotifierError::Delivery { .. }));
    }
}
