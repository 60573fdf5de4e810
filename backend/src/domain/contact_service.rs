//! Contact form pipeline: validate, store in the inbox, notify.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    ContactCommand, ContactNotifier, ContactReceipt, InboxRepository, InboxRepositoryError,
};
use crate::domain::{ContactForm, ContactNotification, Error};

fn map_inbox_error(error: InboxRepositoryError) -> Error {
    match error {
        InboxRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("inbox store unavailable: {message}"))
        }
        InboxRepositoryError::Query { message } => {
            Error::internal(format!("inbox store error: {message}"))
        }
    }
}

/// Contact service implementing [`ContactCommand`].
#[derive(Clone)]
pub struct ContactService<I, N> {
    inbox: Arc<I>,
    notifier: Arc<N>,
    clock: Arc<dyn Clock>,
}

impl<I, N> ContactService<I, N> {
    /// Create a new contact service.
    pub fn new(inbox: Arc<I>, notifier: Arc<N>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inbox,
            notifier,
            clock,
        }
    }
}

#[async_trait]
impl<I, N> ContactCommand for ContactService<I, N>
where
    I: InboxRepository,
    N: ContactNotifier,
{
    async fn submit(&self, form: ContactForm) -> Result<ContactReceipt, Error> {
        let violations = form.violations();
        if !violations.is_empty() {
            return Err(Error::invalid_request(format!(
                "Validation failed: {}",
                violations.join("; ")
            ))
            .with_details(json!({ "violations": violations })));
        }

        let message = form.to_inbox_message(self.clock.utc());
        let saved = match self.inbox.save(&message).await {
            Ok(stored) => {
                info!(message_id = stored.id, "contact form submission saved");
                true
            }
            Err(err) => {
                error!(error = %err, "failed to save contact form submission");
                false
            }
        };

        // The owner is notified even when the inbox write failed.
        let notification = ContactNotification::for_submission(&form, &message);
        if let Err(err) = self.notifier.notify(&notification).await {
            warn!(
                error = %err,
                reference_id = %notification.reference_id,
                "contact notification not delivered"
            );
        }

        Ok(ContactReceipt {
            saved,
            reference_id: message.unique_id,
        })
    }

    async fn mark_read(&self, id: i32) -> Result<(), Error> {
        let found = self
            .inbox
            .mark_read(id, self.clock.utc())
            .await
            .map_err(map_inbox_error)?;
        if found {
            Ok(())
        } else {
            Err(Error::not_found(format!("message {id} not found")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{ContactNotifierError, MockContactNotifier, MockInboxRepository};
    use crate::test_support::{fixture_clock, fixture_timestamp};
    use rstest::{fixture, rstest};

    #[fixture]
    fn form() -> ContactForm {
        ContactForm {
            full_name: "Asha Rao".to_owned(),
            email: "asha@example.com".to_owned(),
            phone_number: "+91 98765 43210".to_owned(),
            company: None,
            gst_number: None,
            subject: "Quote request".to_owned(),
            message: "Please call me about cutting discs.".to_owned(),
        }
    }

    fn make_service(
        inbox: MockInboxRepository,
        notifier: MockContactNotifier,
    ) -> ContactService<MockInboxRepository, MockContactNotifier> {
        ContactService::new(Arc::new(inbox), Arc::new(notifier), fixture_clock())
    }

    #[rstest]
    #[tokio::test]
    async fn submit_saves_then_notifies(form: ContactForm) {
        let mut inbox = MockInboxRepository::new();
        inbox
            .expect_save()
            .withf(|message| message.unread && message.received_at == fixture_timestamp())
            .times(1)
            .returning(|message| Ok(message.clone().with_id(1)));
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.subject == "Contact Form: Asha Rao <asha@example.com>")
            .times(1)
            .return_once(|_| Ok(()));

        let receipt = make_service(inbox, notifier)
            .submit(form)
            .await
            .expect("valid form");
        assert!(receipt.saved);
        assert!(!receipt.reference_id.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn notification_failure_does_not_change_outcome(form: ContactForm) {
        let mut inbox = MockInboxRepository::new();
        inbox
            .expect_save()
            .returning(|message| Ok(message.clone().with_id(2)));
        let mut notifier = MockContactNotifier::new();
        notifier
            .expect_notify()
            .return_once(|_| Err(ContactNotifierError::delivery("smtp down")));

        let receipt = make_service(inbox, notifier)
            .submit(form)
            .await
            .expect("valid form");
        assert!(receipt.saved);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_save_still_notifies(form: ContactForm) {
        let mut inbox = MockInboxRepository::new();
        inbox
            .expect_save()
            .return_once(|_| Err(InboxRepositoryError::connection("refused")));
        let mut notifier = MockContactNotifier::new();
        notifier.expect_notify().times(1).return_once(|_| Ok(()));

        let receipt = make_service(inbox, notifier)
            .submit(form)
            .await
            .expect("valid form");
        assert!(!receipt.saved);
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_form_lists_every_violation(mut form: ContactForm) {
        form.full_name = String::new();
        form.message = "short".to_owned();

        let error = make_service(MockInboxRepository::new(), MockContactNotifier::new())
            .submit(form)
            .await
            .expect_err("invalid form");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.message(),
            "Validation failed: Full name is required; \
             Message must be between 10 and 2000 characters"
        );
        let details = error.details().expect("violations attached");
        assert_eq!(
            details.get("violations").and_then(|v| v.as_array()).map(Vec::len),
            Some(2)
        );
    }

    #[rstest]
    #[case(true, None)]
    #[case(false, Some(ErrorCode::NotFound))]
    #[tokio::test]
    async fn mark_read_reports_missing_messages(
        #[case] found: bool,
        #[case] expected: Option<ErrorCode>,
    ) {
        let mut inbox = MockInboxRepository::new();
        inbox
            .expect_mark_read()
            .withf(|id, at| *id == 3 && *at == fixture_timestamp())
            .return_once(move |_, _| Ok(found));

        let result = make_service(inbox, MockContactNotifier::new())
            .mark_read(3)
            .await;
        assert_eq!(result.err().map(|e| e.code()), expected);
    }
}
