//! Catalogue entities: the three-level taxonomy, products, and the derived
//! view models produced by the catalogue resolver.
//!
//! Taxonomy levels are `Category` → `SubCategory1` (a brand) →
//! `SubCategory2`. Products always belong to a category and may additionally
//! be attached to a brand and a second-level subcategory.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Top-level taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// First-level subcategory, shown to shoppers as a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory1 {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

/// Second-level subcategory nested under a brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory2 {
    pub id: i32,
    pub name: String,
    pub sub_category1_id: i32,
}

/// Product read model, including the names of the taxonomy nodes it hangs
/// from so projections never need a second lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
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
    pub category_name: Option<String>,
    pub sub_category1_name: Option<String>,
    pub sub_category2_name: Option<String>,
}

impl Product {
    /// Offer price when one is actually set; zero and negative values mean
    /// "no offer".
    pub fn effective_offer_price(&self) -> Option<Decimal> {
        self.offer_price.filter(|offer| *offer > Decimal::ZERO)
    }

    /// A product is a special offer only when `0 < offer_price < price`.
    pub fn is_special_offer(&self) -> bool {
        self.effective_offer_price()
            .is_some_and(|offer| offer < self.price)
    }

    /// Fractional discount `(price - offer) / price` for special offers.
    pub fn discount_ratio(&self) -> Option<Decimal> {
        if !self.is_special_offer() {
            return None;
        }
        let offer = self.effective_offer_price()?;
        (self.price - offer).checked_div(self.price)
    }
}

/// Compact product reference attached to subcategory samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

/// One second-level subcategory with its most recent product, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory2Sample {
    pub sub_category2_id: i32,
    pub sub_category2_name: String,
    pub product: Option<ProductSummary>,
}

/// Resolved slice of the catalogue for one category page.
///
/// `sub_categories2_map` carries one entry per brand in `sub_categories1`
/// (empty lists included) on the browse and brand paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryViewModel {
    pub category_id: i32,
    pub category_name: String,
    pub sub_categories1: Vec<SubCategory1>,
    pub sub_categories2_map: BTreeMap<i32, Vec<SubCategory2>>,
    pub products: Vec<Product>,
    pub selected_sub_category1_id: Option<i32>,
    pub selected_sub_category2_id: Option<i32>,
}

impl CategoryViewModel {
    /// View model for a category name that matched nothing: the requested
    /// name is echoed back with id `0` and no content.
    pub fn unmatched(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            ..Self::default()
        }
    }
}

/// Brand page resolution plus the template hint for the page.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandPage {
    pub view_name: String,
    pub view: CategoryViewModel,
}

/// Admin product listing with unscoped taxonomy pickers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminListing {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub sub_categories1: Vec<SubCategory1>,
    pub sub_categories2: Vec<SubCategory2>,
    pub selected_category_id: i32,
    pub selected_sub_category1_id: i32,
    pub selected_sub_category2_id: i32,
    pub search_term: Option<String>,
}

/// Category page request: a name fragment plus optional drill-down ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBrowse {
    pub category_name: String,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
}

/// Brand page request for the pretty `/product/category/{name}/{brand}` URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrandBrowse {
    pub category_name: String,
    pub brand_name: Option<String>,
}

/// Admin listing request. Ids `<= 0` mean "not selected".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminListRequest {
    pub category_id: i32,
    pub sub_category1_id: i32,
    pub sub_category2_id: i32,
    pub search_term: Option<String>,
}

/// Storefront filter request issued by the category page scripts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductFilter {
    pub category_id: i32,
    pub sub_category1_id: Option<i32>,
    pub sub_category2_id: Option<i32>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Shared catalogue builders for unit tests.

    use super::*;

    pub(crate) fn category(id: i32, name: &str) -> Category {
        Category {
            id,
            name: name.to_owned(),
        }
    }

    pub(crate) fn brand(id: i32, name: &str, category_id: i32) -> SubCategory1 {
        SubCategory1 {
            id,
            name: name.to_owned(),
            category_id,
        }
    }

    pub(crate) fn sub_category2(id: i32, name: &str, sub_category1_id: i32) -> SubCategory2 {
        SubCategory2 {
            id,
            name: name.to_owned(),
            sub_category1_id,
        }
    }

    pub(crate) fn product(id: i32, name: &str, price: Decimal, offer: Option<Decimal>) -> Product {
        Product {
            id,
            name: name.to_owned(),
            description: format!("{name} description"),
            price,
            offer_price: offer,
            category_id: 1,
            sub_category1_id: None,
            sub_category2_id: None,
            image_url: None,
            created_at: None,
            category_name: None,
            sub_category1_name: None,
            sub_category2_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;
    use rstest::rstest;

    fn dec(units: i64) -> Decimal {
        Decimal::new(units, 0)
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(dec(0)), false)]
    #[case(Some(dec(-5)), false)]
    #[case(Some(dec(100)), false)]
    #[case(Some(dec(150)), false)]
    #[case(Some(dec(80)), true)]
    fn special_offer_requires_positive_offer_below_price(
        #[case] offer: Option<Decimal>,
        #[case] expected: bool,
    ) {
        let item = product(1, "Drill", dec(100), offer);
        assert_eq!(item.is_special_offer(), expected);
    }

    #[rstest]
    fn discount_ratio_is_exact() {
        let item = product(1, "Drill", dec(200), Some(dec(150)));
        assert_eq!(item.discount_ratio(), Some(Decimal::new(25, 2)));
    }

    #[rstest]
    fn discount_ratio_is_none_without_offer() {
        let item = product(1, "Drill", dec(200), None);
        assert_eq!(item.discount_ratio(), None);
    }

    #[rstest]
    fn effective_offer_hides_non_positive_values() {
        let item = product(1, "Drill", dec(200), Some(dec(0)));
        assert_eq!(item.effective_offer_price(), None);
    }

    #[rstest]
    fn unmatched_view_echoes_requested_name() {
        let view = CategoryViewModel::unmatched("Widgets");
        assert_eq!(view.category_id, 0);
        assert_eq!(view.category_name, "Widgets");
        assert!(view.products.is_empty());
        assert!(view.sub_categories1.is_empty());
        assert!(view.sub_categories2_map.is_empty());
        assert_eq!(view.selected_sub_category1_id, None);
    }
}
