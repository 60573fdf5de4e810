//! Inbox messages and the contact form that feeds them.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

/// Folder every contact form submission is filed under.
pub const CONTACT_FORM_FOLDER: &str = "ContactForm";

const SNIPPET_CHARS: usize = 100;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid regex literal {pattern}: {err}"))
}

static GST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\+?[0-9][0-9 ()\-]{5,}[0-9]$"));

/// Stored inbox entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxMessage {
    pub id: i32,
    pub unique_id: String,
    pub folder: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub snippet: String,
    pub text_body: String,
    pub received_at: DateTime<Utc>,
    pub unread: bool,
    pub is_contact_form: bool,
    pub labels: Vec<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub gst_number: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Inbox entry awaiting its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInboxMessage {
    pub unique_id: String,
    pub folder: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub snippet: String,
    pub text_body: String,
    pub received_at: DateTime<Utc>,
    pub unread: bool,
    pub is_contact_form: bool,
    pub labels: Vec<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub gst_number: Option<String>,
    pub message: Option<String>,
}

impl NewInboxMessage {
    /// Attach the id assigned by the store.
    pub fn with_id(self, id: i32) -> InboxMessage {
        InboxMessage {
            id,
            unique_id: self.unique_id,
            folder: self.folder,
            from_name: self.from_name,
            from_email: self.from_email,
            subject: self.subject,
            snippet: self.snippet,
            text_body: self.text_body,
            received_at: self.received_at,
            unread: self.unread,
            is_contact_form: self.is_contact_form,
            labels: self.labels,
            company: self.company,
            phone: self.phone,
            gst_number: self.gst_number,
            message: self.message,
            created_at: self.received_at,
            updated_at: self.received_at,
        }
    }
}

/// Visitor-submitted contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub gst_number: Option<String>,
    pub subject: String,
    pub message: String,
}

fn blank_to_none(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn check_required(violations: &mut Vec<String>, value: &str, label: &str, max: usize) {
    let count = value.trim().chars().count();
    if count == 0 {
        violations.push(format!("{label} is required"));
    } else if count > max {
        violations.push(format!("{label} cannot exceed {max} characters"));
    }
}

impl ContactForm {
    /// Every violated rule, in field order. Empty when the form is valid.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        check_required(&mut violations, &self.full_name, "Full name", 100);

        check_required(&mut violations, &self.email, "Email", 255);
        let email = self.email.trim();
        if !email.is_empty() && !EMAIL.is_match(email) {
            violations.push("Please enter a valid email address".to_owned());
        }

        check_required(&mut violations, &self.phone_number, "Phone number", 20);
        let phone = self.phone_number.trim();
        if !phone.is_empty() && !PHONE.is_match(phone) {
            violations.push("Please enter a valid phone number".to_owned());
        }

        if let Some(company) = blank_to_none(self.company.as_ref()) {
            if company.chars().count() > 100 {
                violations.push("Company name cannot exceed 100 characters".to_owned());
            }
        }

        if let Some(gst) = blank_to_none(self.gst_number.as_ref()) {
            if gst.chars().count() > 15 {
                violations.push("GST number cannot exceed 15 characters".to_owned());
            } else if !GST_NUMBER.is_match(gst) {
                violations.push("Please enter a valid GST number".to_owned());
            }
        }

        check_required(&mut violations, &self.subject, "Subject", 200);

        let message_len = self.message.trim().chars().count();
        if message_len == 0 {
            violations.push("Message is required".to_owned());
        } else if !(10..=2000).contains(&message_len) {
            violations.push("Message must be between 10 and 2000 characters".to_owned());
        }

        violations
    }

    /// Plain-text rendering stored as the inbox body and used for
    /// notifications.
    pub fn text_body(&self, sent_at: DateTime<Utc>) -> String {
        format!(
            "New Contact Form Submission\n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Company: {}\n\
             GST Number: {}\n\
             Subject: {}\n\
             Message:\n{}\n\
             Sent on: {}",
            self.full_name.trim(),
            self.email.trim(),
            self.phone_number.trim(),
            blank_to_none(self.company.as_ref()).unwrap_or("-"),
            blank_to_none(self.gst_number.as_ref()).unwrap_or("-"),
            self.subject.trim(),
            self.message,
            sent_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }

    /// Build the unread inbox entry recorded for this submission.
    pub fn to_inbox_message(&self, received_at: DateTime<Utc>) -> NewInboxMessage {
        NewInboxMessage {
            unique_id: Uuid::new_v4().to_string(),
            folder: CONTACT_FORM_FOLDER.to_owned(),
            from_name: self.full_name.trim().to_owned(),
            from_email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            snippet: snippet(&self.message),
            text_body: self.text_body(received_at),
            received_at,
            unread: true,
            is_contact_form: true,
            labels: vec![CONTACT_FORM_FOLDER.to_owned(), "Unread".to_owned()],
            company: blank_to_none(self.company.as_ref()).map(str::to_owned),
            phone: Some(self.phone_number.trim().to_owned()),
            gst_number: blank_to_none(self.gst_number.as_ref()).map(str::to_owned),
            message: Some(self.message.clone()),
        }
    }
}

/// First 100 characters of `message`, with `...` appended when truncated.
pub fn snippet(message: &str) -> String {
    if message.chars().count() > SNIPPET_CHARS {
        let head: String = message.chars().take(SNIPPET_CHARS).collect();
        format!("{head}...")
    } else {
        message.to_owned()
    }
}

/// Outbound notification announcing a new contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotification {
    pub reference_id: String,
    pub subject: String,
    pub reply_to: String,
    pub reply_to_name: String,
    pub body: String,
}

impl ContactNotification {
    /// Notification for a stored submission.
    pub fn for_submission(form: &ContactForm, message: &NewInboxMessage) -> Self {
        Self {
            reference_id: message.unique_id.clone(),
            subject: format!(
                "Contact Form: {} <{}>",
                message.from_name, message.from_email
            ),
            reply_to: message.from_email.clone(),
            reply_to_name: form.full_name.trim().to_owned(),
            body: message.text_body.clone(),
        }
    }
}
