//! Domain primitives, services and ports.
//!
//! Purpose: resolve storefront navigation requests against the product
//! taxonomy, administer products, and run the contact inbox. Nothing here
//! depends on HTTP or a particular store; adapters plug in through
//! [`ports`].
//!
//! Public surface:
//! - Catalogue entities (`Category`, `SubCategory1`, `SubCategory2`,
//!   `Product`) and the view models built from them.
//! - Inbox entities (`InboxMessage`, `ContactForm`).
//! - Services implementing the driving ports: [`CatalogueService`],
//!   [`ProductAdminService`], [`ContactService`], [`DashboardService`].
//! - Error (alias to `error::Error`): transport-agnostic failure payload.

pub mod brand_routes;
pub mod catalogue;
mod catalogue_service;
mod contact_service;
mod dashboard_service;
pub mod error;
pub mod fail_soft;
pub mod inbox;
pub mod name_match;
pub mod ports;
mod product_admin_service;
pub mod trace_id;

pub use self::brand_routes::{
    BrandRoute, BrandRouteMismatch, BrandRouteTable, BrandRouteTableError, FALLBACK_VIEW_NAME,
};
pub use self::catalogue::{
    AdminListRequest, AdminListing, BrandBrowse, BrandPage, Category, CategoryBrowse,
    CategoryViewModel, Product, ProductFilter, ProductSummary, SubCategory1, SubCategory2,
    SubCategory2Sample,
};
pub use self::catalogue_service::CatalogueService;
pub use self::contact_service::ContactService;
pub use self::dashboard_service::DashboardService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::inbox::{
    CONTACT_FORM_FOLDER, ContactForm, ContactNotification, InboxMessage, NewInboxMessage,
};
pub use self::product_admin_service::{MAX_IMAGE_DATA_LEN, ProductAdminService};
pub use self::trace_id::TraceId;
