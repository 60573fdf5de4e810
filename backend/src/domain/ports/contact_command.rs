//! Driving port for the contact form pipeline.

use async_trait::async_trait;

use crate::domain::{ContactForm, Error};

/// Outcome of a contact submission.
///
/// `saved` reflects only the inbox write; notification delivery never
/// changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    pub saved: bool,
    pub reference_id: String,
}

/// Contact form and inbox use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Validate, store and announce a submission.
    ///
    /// Fails with `invalid_request` listing every violated rule.
    async fn submit(&self, form: ContactForm) -> Result<ContactReceipt, Error>;

    /// Mark inbox message `id` as read; `not_found` when absent.
    async fn mark_read(&self, id: i32) -> Result<(), Error>;
}
