//! JSON projections of catalogue, admin and inbox read models.
//!
//! Every projection is total: any product, message or view model maps to a
//! response without failing. Missing dates render as `"N/A"`, offers at or
//! below zero render as `null`, and absent taxonomy references in admin rows
//! fall back to `{id: 0, name: ""}`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ports::DashboardStats;
use crate::domain::{
    AdminListing, BrandPage, Category, CategoryViewModel, InboxMessage, Product, ProductSummary,
    SubCategory1, SubCategory2, SubCategory2Sample,
};

/// Placeholder for absent timestamps.
pub const MISSING_DATE: &str = "N/A";

/// Date rendering used by a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `14/03/2026`, used by list views.
    List,
    /// `Mar 14, 2026`, used by the storefront filter.
    Filter,
    /// `14/03/2026 09:30`, used by single-item views.
    Detail,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            Self::List => "%d/%m/%Y",
            Self::Filter => "%b %d, %Y",
            Self::Detail => "%d/%m/%Y %H:%M",
        }
    }

    /// Render `at`, or [`MISSING_DATE`].
    pub fn render(self, at: Option<DateTime<Utc>>) -> String {
        at.map_or_else(
            || MISSING_DATE.to_owned(),
            |at| at.format(self.pattern()).to_string(),
        )
    }
}

/// `{success: true, data}` wrapper used by list endpoints.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{success, message}` acknowledgement for admin and contact actions.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    /// Successful acknowledgement.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Flat product row for storefront lists.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = f64, example = 1499.0)]
    pub price: Decimal,
    #[schema(value_type = Option<f64>, example = 1299.0)]
    pub offer_price: Option<Decimal>,
    pub image_url: Option<String>,
    #[schema(example = "14/03/2026")]
    pub created_at: String,
    pub category_name: Option<String>,
    pub sub_category1_name: Option<String>,
    pub sub_category2_name: Option<String>,
}

impl ProductListItem {
    /// Project `product`, rendering its date with `style`.
    pub fn project(product: &Product, style: DateStyle) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            offer_price: product.effective_offer_price(),
            image_url: product.image_url.clone(),
            created_at: style.render(product.created_at),
            category_name: product.category_name.clone(),
            sub_category1_name: product.sub_category1_name.clone(),
            sub_category2_name: product.sub_category2_name.clone(),
        }
    }

    /// Project a list with one date style.
    pub fn project_all(products: &[Product], style: DateStyle) -> Vec<Self> {
        products.iter().map(|p| Self::project(p, style)).collect()
    }
}

/// Single-product payload carrying taxonomy ids for edit forms.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = Option<f64>)]
    pub offer_price: Option<Decimal>,
    pub category_id: i32,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
    pub image_url: Option<String>,
    #[schema(example = "14/03/2026 09:30")]
    pub created_at: String,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            offer_price: product.effective_offer_price(),
            category_id: product.category_id,
            sub_category1_id: product.sub_category1_id,
            sub_category2_id: product.sub_category2_id,
            image_url: product.image_url.clone(),
            created_at: DateStyle::Detail.render(product.created_at),
        }
    }
}

/// `{id, name}` pair for pickers and admin references.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct TaxonomyRef {
    pub id: i32,
    pub name: String,
}

impl TaxonomyRef {
    fn resolve(id: Option<i32>, name: Option<&String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            name: name.cloned().unwrap_or_default(),
        }
    }
}

impl From<&Category> for TaxonomyRef {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl From<&SubCategory1> for TaxonomyRef {
    fn from(node: &SubCategory1) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
        }
    }
}

impl From<&SubCategory2> for TaxonomyRef {
    fn from(node: &SubCategory2) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
        }
    }
}

/// Brand node with its parent category id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory1View {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

impl From<&SubCategory1> for SubCategory1View {
    fn from(node: &SubCategory1) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
            category_id: node.category_id,
        }
    }
}

/// Second-level node with its parent brand id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory2View {
    pub id: i32,
    pub name: String,
    pub sub_category1_id: i32,
}

impl From<&SubCategory2> for SubCategory2View {
    fn from(node: &SubCategory2) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
            sub_category1_id: node.sub_category1_id,
        }
    }
}

/// Resolved category page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category_id: i32,
    pub category_name: String,
    pub sub_categories1: Vec<SubCategory1View>,
    /// Second-level subcategories keyed by brand id.
    pub sub_categories2_map: BTreeMap<i32, Vec<SubCategory2View>>,
    pub products: Vec<ProductListItem>,
    pub selected_sub_category1_id: Option<i32>,
    pub selected_sub_category2_id: Option<i32>,
}

impl From<&CategoryViewModel> for CategoryView {
    fn from(model: &CategoryViewModel) -> Self {
        Self {
            category_id: model.category_id,
            category_name: model.category_name.clone(),
            sub_categories1: model.sub_categories1.iter().map(Into::into).collect(),
            sub_categories2_map: model
                .sub_categories2_map
                .iter()
                .map(|(id, nodes)| (*id, nodes.iter().map(Into::into).collect()))
                .collect(),
            products: ProductListItem::project_all(&model.products, DateStyle::List),
            selected_sub_category1_id: model.selected_sub_category1_id,
            selected_sub_category2_id: model.selected_sub_category2_id,
        }
    }
}

/// Brand page with the template hint chosen by the route table.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandPageView {
    #[schema(example = "PowerTools")]
    pub view_name: String,
    pub view: CategoryView,
}

impl From<&BrandPage> for BrandPageView {
    fn from(page: &BrandPage) -> Self {
        Self {
            view_name: page.view_name.clone(),
            view: CategoryView::from(&page.view),
        }
    }
}

/// Product row on the admin listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminProductRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = Option<f64>)]
    pub offer_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub created_at: String,
    pub category: TaxonomyRef,
    pub sub_category1: TaxonomyRef,
    pub sub_category2: TaxonomyRef,
}

impl From<&Product> for AdminProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            offer_price: product.effective_offer_price(),
            image_url: product.image_url.clone(),
            created_at: DateStyle::List.render(product.created_at),
            category: TaxonomyRef::resolve(
                Some(product.category_id),
                product.category_name.as_ref(),
            ),
            sub_category1: TaxonomyRef::resolve(
                product.sub_category1_id,
                product.sub_category1_name.as_ref(),
            ),
            sub_category2: TaxonomyRef::resolve(
                product.sub_category2_id,
                product.sub_category2_name.as_ref(),
            ),
        }
    }
}

/// Admin product listing with picker contents and the echoed selection.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminListingView {
    pub products: Vec<AdminProductRow>,
    pub categories: Vec<TaxonomyRef>,
    pub sub_categories1: Vec<SubCategory1View>,
    pub sub_categories2: Vec<SubCategory2View>,
    pub selected_category_id: i32,
    pub selected_sub_category1_id: i32,
    pub selected_sub_category2_id: i32,
    pub search_term: Option<String>,
}

impl From<&AdminListing> for AdminListingView {
    fn from(listing: &AdminListing) -> Self {
        Self {
            products: listing.products.iter().map(Into::into).collect(),
            categories: listing.categories.iter().map(Into::into).collect(),
            sub_categories1: listing.sub_categories1.iter().map(Into::into).collect(),
            sub_categories2: listing.sub_categories2.iter().map(Into::into).collect(),
            selected_category_id: listing.selected_category_id,
            selected_sub_category1_id: listing.selected_sub_category1_id,
            selected_sub_category2_id: listing.selected_sub_category2_id,
            search_term: listing.search_term.clone(),
        }
    }
}

/// Compact product attached to a subcategory sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl From<&ProductSummary> for ProductSummaryView {
    fn from(summary: &ProductSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name.clone(),
            description: summary.description.clone(),
            image_url: summary.image_url.clone(),
        }
    }
}

/// One second-level subcategory with its sample product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory2SampleView {
    pub sub_category2_id: i32,
    pub sub_category2_name: String,
    pub product: Option<ProductSummaryView>,
}

impl From<&SubCategory2Sample> for SubCategory2SampleView {
    fn from(sample: &SubCategory2Sample) -> Self {
        Self {
            sub_category2_id: sample.sub_category2_id,
            sub_category2_name: sample.sub_category2_name.clone(),
            product: sample.product.as_ref().map(Into::into),
        }
    }
}

/// Recent product row on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentProductView {
    pub id: i32,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub category_name: Option<String>,
    pub created_at: String,
}

impl From<&Product> for RecentProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category_name: product.category_name.clone(),
            created_at: DateStyle::List.render(product.created_at),
        }
    }
}

/// Recent unread message row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentMessageView {
    pub id: i32,
    pub from_name: String,
    pub subject: String,
    #[schema(example = "14/03/2026 09:30")]
    pub received_at: String,
}

impl From<&InboxMessage> for RecentMessageView {
    fn from(message: &InboxMessage) -> Self {
        Self {
            id: message.id,
            from_name: message.from_name.clone(),
            subject: message.subject.clone(),
            received_at: DateStyle::Detail.render(Some(message.received_at)),
        }
    }
}

/// Admin dashboard counters and recency slices.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_products: usize,
    pub total_categories: usize,
    pub total_emails: usize,
    pub unread_emails: usize,
    pub contact_forms: usize,
    pub recent_products: Vec<RecentProductView>,
    pub recent_messages: Vec<RecentMessageView>,
}

impl From<&DashboardStats> for DashboardView {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_products: stats.total_products,
            total_categories: stats.total_categories,
            total_emails: stats.total_emails,
            unread_emails: stats.unread_emails,
            contact_forms: stats.contact_forms,
            recent_products: stats.recent_products.iter().map(Into::into).collect(),
            recent_messages: stats.recent_messages.iter().map(Into::into).collect(),
        }
    }
}

/// Inbox entry on the admin message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InboxMessageView {
    pub id: i32,
    pub unique_id: String,
    pub folder: String,
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub snippet: String,
    pub received_at: String,
    pub unread: bool,
    pub is_contact_form: bool,
    pub labels: Vec<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub gst_number: Option<String>,
}

impl From<&InboxMessage> for InboxMessageView {
    fn from(message: &InboxMessage) -> Self {
        Self {
            id: message.id,
            unique_id: message.unique_id.clone(),
            folder: message.folder.clone(),
            from_name: message.from_name.clone(),
            from_email: message.from_email.clone(),
            subject: message.subject.clone(),
            snippet: message.snippet.clone(),
            received_at: DateStyle::Detail.render(Some(message.received_at)),
            unread: message.unread,
            is_contact_form: message.is_contact_form,
            labels: message.labels.clone(),
            company: message.company.clone(),
            phone: message.phone.clone(),
            gst_number: message.gst_number.clone(),
        }
    }
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod tests;
