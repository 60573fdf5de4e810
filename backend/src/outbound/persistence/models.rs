//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::ports::ProductRecord;
use crate::domain::{Category, InboxMessage, NewInboxMessage, Product, SubCategory1, SubCategory2};

use super::schema::{categories, inbox_messages, products, sub_categories1, sub_categories2};

// ---------------------------------------------------------------------------
// Taxonomy models
// ---------------------------------------------------------------------------

/// Row struct for reading from the categories table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub name: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Insertable struct for creating categories.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub(crate) struct NewCategoryRow<'a> {
    pub name: &'a str,
}

/// Row struct for reading from the sub_categories1 table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sub_categories1)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SubCategory1Row {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

impl From<SubCategory1Row> for SubCategory1 {
    fn from(row: SubCategory1Row) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category_id: row.category_id,
        }
    }
}

/// Row struct for reading from the sub_categories2 table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sub_categories2)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SubCategory2Row {
    pub id: i32,
    pub name: String,
    pub sub_category1_id: i32,
}

impl From<SubCategory2Row> for SubCategory2 {
    fn from(row: SubCategory2Row) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sub_category1_id: row.sub_category1_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Product models
// ---------------------------------------------------------------------------

/// Row struct for reading from the products table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub offer_price: Option<Decimal>,
    pub category_id: i32,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Product row joined with the names of its taxonomy nodes.
pub(crate) type ProductJoinRow = (ProductRow, Option<String>, Option<String>, Option<String>);

/// Convert a joined product row into the domain read model.
pub(crate) fn product_from_join(
    (row, category_name, sub_category1_name, sub_category2_name): ProductJoinRow,
) -> Product {
    Product {
        id: row.id,
        name: row.name,
        description: row.description,
        price: row.price,
        offer_price: row.offer_price,
        category_id: row.category_id,
        sub_category1_id: row.sub_category1_id,
        sub_category2_id: row.sub_category2_id,
        image_url: row.image_url,
        created_at: row.created_at,
        category_name,
        sub_category1_name,
        sub_category2_name,
    }
}

/// Insertable and changeset struct for product writes.
///
/// `None` values are written as `NULL` so updates can clear the offer,
/// subcategories and image.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ProductWriteRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: Decimal,
    pub offer_price: Option<Decimal>,
    pub category_id: i32,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
    pub image_url: Option<&'a str>,
    pub created_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a ProductRecord> for ProductWriteRow<'a> {
    fn from(record: &'a ProductRecord) -> Self {
        Self {
            name: &record.name,
            description: &record.description,
            price: record.price,
            offer_price: record.offer_price,
            category_id: record.category_id,
            sub_category1_id: record.sub_category1_id,
            sub_category2_id: record.sub_category2_id,
            image_url: record.image_url.as_deref(),
            created_at: record.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Inbox models
// ---------------------------------------------------------------------------

/// Row struct for reading from the inbox_messages table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = inbox_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct InboxMessageRow {
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

impl From<InboxMessageRow> for InboxMessage {
    fn from(row: InboxMessageRow) -> Self {
        Self {
            id: row.id,
            unique_id: row.unique_id,
            folder: row.folder,
            from_name: row.from_name,
            from_email: row.from_email,
            subject: row.subject,
            snippet: row.snippet,
            text_body: row.text_body,
            received_at: row.received_at,
            unread: row.unread,
            is_contact_form: row.is_contact_form,
            labels: row.labels,
            company: row.company,
            phone: row.phone,
            gst_number: row.gst_number,
            message: row.message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable struct for new inbox messages.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = inbox_messages)]
pub(crate) struct NewInboxMessageRow<'a> {
    pub unique_id: &'a str,
    pub folder: &'a str,
    pub from_name: &'a str,
    pub from_email: &'a str,
    pub subject: &'a str,
    pub snippet: &'a str,
    pub text_body: &'a str,
    pub received_at: DateTime<Utc>,
    pub unread: bool,
    pub is_contact_form: bool,
    pub labels: &'a [String],
    pub company: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub gst_number: Option<&'a str>,
    pub message: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a NewInboxMessage> for NewInboxMessageRow<'a> {
    fn from(message: &'a NewInboxMessage) -> Self {
        Self {
            unique_id: &message.unique_id,
            folder: &message.folder,
            from_name: &message.from_name,
            from_email: &message.from_email,
            subject: &message.subject,
            snippet: &message.snippet,
            text_body: &message.text_body,
            received_at: message.received_at,
            unread: message.unread,
            is_contact_form: message.is_contact_form,
            labels: &message.labels,
            company: message.company.as_deref(),
            phone: message.phone.as_deref(),
            gst_number: message.gst_number.as_deref(),
            message: message.message.as_deref(),
            created_at: message.received_at,
            updated_at: message.received_at,
        }
    }
}
