//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When a
//! migration changes a table, update the matching block here (or regenerate
//! it with `diesel print-schema`).

diesel::table! {
    /// Top-level product categories.
    categories (id) {
        id -> Int4,
        name -> Varchar,
    }
}

diesel::table! {
    /// First-level subcategories, shown to shoppers as brands.
    sub_categories1 (id) {
        id -> Int4,
        name -> Varchar,
        category_id -> Int4,
    }
}

diesel::table! {
    /// Second-level subcategories nested under a brand.
    sub_categories2 (id) {
        id -> Int4,
        name -> Varchar,
        sub_category1_id -> Int4,
    }
}

diesel::table! {
    /// Catalogue products.
    ///
    /// `offer_price` is nullable; a null or non-positive value means "no
    /// offer". `created_at` is nullable for rows imported without a date.
    products (id) {
        id -> Int4,
        name -> Varchar,
        description -> Text,
        price -> Numeric,
        offer_price -> Nullable<Numeric>,
        category_id -> Int4,
        sub_category1_id -> Nullable<Int4>,
        sub_category2_id -> Nullable<Int4>,
        image_url -> Nullable<Text>,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Admin inbox, fed by the contact form.
    inbox_messages (id) {
        id -> Int4,
        /// Public reference handed to notification recipients.
        unique_id -> Varchar,
        folder -> Varchar,
        from_name -> Varchar,
        from_email -> Varchar,
        subject -> Varchar,
        snippet -> Text,
        text_body -> Text,
        received_at -> Timestamptz,
        unread -> Bool,
        is_contact_form -> Bool,
        labels -> Array<Text>,
        company -> Nullable<Varchar>,
        phone -> Nullable<Varchar>,
        gst_number -> Nullable<Varchar>,
        message -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    categories,
    sub_categories1,
    sub_categories2,
    products,
);
