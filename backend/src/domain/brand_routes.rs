//! Brand routing table.
//!
//! Brand pages are addressed as `/product/category/{categoryName}/{brand}`.
//! The category segment is not matched against the taxonomy by name: it is
//! looked up in this table, which pins each routable segment to a fixed
//! category id and the name of the template that renders it. The table is
//! configuration, so [`BrandRouteTable::verify`] exists to detect drift
//! between it and the stored taxonomy.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Category;

/// Template used when no dedicated template matches the requested segment
/// exactly.
pub const FALLBACK_VIEW_NAME: &str = "Category";

/// One routable category segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRoute {
    /// Route segment, as configured.
    pub category_name: String,
    /// Category the segment resolves to.
    pub category_id: i32,
    /// Template rendering the page.
    pub view_name: String,
}

/// Errors raised while loading a brand route table.
#[derive(Debug, Error)]
pub enum BrandRouteTableError {
    /// The document is not a JSON object of `{ "name": id }` entries.
    #[error("brand route table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two entries differ only by case and cannot both be routed.
    #[error("brand route `{0}` is declared more than once")]
    Duplicate(String),
}

/// Drift between the table and the stored taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandRouteMismatch {
    /// The pinned category id does not exist.
    MissingCategory { route: String, category_id: i32 },
    /// The pinned category exists under a different name.
    RenamedCategory {
        route: String,
        category_id: i32,
        stored_name: String,
    },
}

impl BrandRouteMismatch {
    /// Route segment the mismatch was found on.
    pub fn route(&self) -> &str {
        match self {
            Self::MissingCategory { route, .. } | Self::RenamedCategory { route, .. } => route,
        }
    }
}

impl std::fmt::Display for BrandRouteMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCategory { route, category_id } => {
                write!(f, "route `{route}` points at missing category {category_id}")
            }
            Self::RenamedCategory {
                route,
                category_id,
                stored_name,
            } => write!(
                f,
                "route `{route}` points at category {category_id} which is stored as `{stored_name}`"
            ),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RouteEntry {
    Id(i32),
    Detailed {
        #[serde(rename = "categoryId")]
        category_id: i32,
        #[serde(rename = "viewName")]
        view_name: Option<String>,
    },
}

/// Fixed map from route segment to category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRouteTable {
    routes: Vec<BrandRoute>,
}

impl Default for BrandRouteTable {
    fn default() -> Self {
        Self::from_pairs([
            ("Abrasives", 1),
            ("CuttingTools", 2),
            ("Pneumatic", 3),
            ("PowerTools", 4),
        ])
    }
}

impl BrandRouteTable {
    /// Build a table whose view names equal the route segments.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, i32)>) -> Self {
        let routes = pairs
            .into_iter()
            .map(|(name, category_id)| BrandRoute {
                category_name: name.to_owned(),
                category_id,
                view_name: name.to_owned(),
            })
            .collect();
        Self { routes }
    }

    /// Parse a JSON object mapping route segments to category ids.
    ///
    /// Values are either a bare id or `{ "categoryId": 1, "viewName": "..." }`.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::BrandRouteTable;
    ///
    /// let table = BrandRouteTable::from_json(r#"{ "Abrasives": 7 }"#).expect("valid table");
    /// let route = table.lookup("abrasives").expect("case-insensitive lookup");
    /// assert_eq!(route.category_id, 7);
    /// ```
    pub fn from_json(document: &str) -> Result<Self, BrandRouteTableError> {
        let entries: BTreeMap<String, RouteEntry> = serde_json::from_str(document)?;
        let mut routes: Vec<BrandRoute> = Vec::with_capacity(entries.len());
        for (name, entry) in entries {
            if routes
                .iter()
                .any(|route| route.category_name.to_lowercase() == name.to_lowercase())
            {
                return Err(BrandRouteTableError::Duplicate(name));
            }
            let (category_id, view_name) = match entry {
                RouteEntry::Id(id) => (id, name.clone()),
                RouteEntry::Detailed {
                    category_id,
                    view_name,
                } => (category_id, view_name.unwrap_or_else(|| name.clone())),
            };
            routes.push(BrandRoute {
                category_name: name,
                category_id,
                view_name,
            });
        }
        Ok(Self { routes })
    }

    /// Every configured route.
    pub fn routes(&self) -> &[BrandRoute] {
        &self.routes
    }

    /// Route for `segment`, ignoring case.
    pub fn lookup(&self, segment: &str) -> Option<&BrandRoute> {
        let wanted = segment.to_lowercase();
        self.routes
            .iter()
            .find(|route| route.category_name.to_lowercase() == wanted)
    }

    /// Template for `segment`.
    ///
    /// Dedicated templates are only selected by an exact, case-sensitive
    /// match; any other spelling renders with [`FALLBACK_VIEW_NAME`].
    pub fn view_name(&self, segment: &str) -> &str {
        self.routes
            .iter()
            .find(|route| route.category_name == segment)
            .map_or(FALLBACK_VIEW_NAME, |route| route.view_name.as_str())
    }

    /// Compare the table against the stored categories.
    ///
    /// A route matches when its category exists and the stored name, with
    /// whitespace removed, equals the route segment ignoring case.
    pub fn verify(&self, categories: &[Category]) -> Vec<BrandRouteMismatch> {
        self.routes
            .iter()
            .filter_map(|route| {
                let Some(category) = categories.iter().find(|c| c.id == route.category_id) else {
                    return Some(BrandRouteMismatch::MissingCategory {
                        route: route.category_name.clone(),
                        category_id: route.category_id,
                    });
                };
                let compact: String = category
                    .name
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                (compact.to_lowercase() != route.category_name.to_lowercase()).then(|| {
                    BrandRouteMismatch::RenamedCategory {
                        route: route.category_name.clone(),
                        category_id: route.category_id,
                        stored_name: category.name.clone(),
                    }
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::fixtures::category;
    use rstest::rstest;

    #[rstest]
    #[case("PowerTools", Some(4))]
    #[case("powertools", Some(4))]
    #[case("ABRASIVES", Some(1))]
    #[case("Power Tools", None)]
    #[case("Drills", None)]
    fn default_table_lookup_ignores_case(#[case] segment: &str, #[case] expected: Option<i32>) {
        let table = BrandRouteTable::default();
        assert_eq!(table.lookup(segment).map(|r| r.category_id), expected);
    }

    #[rstest]
    #[case("CuttingTools", "CuttingTools")]
    #[case("cuttingtools", "Category")]
    #[case("Unknown", "Category")]
    fn view_name_requires_exact_match(#[case] segment: &str, #[case] expected: &str) {
        let table = BrandRouteTable::default();
        assert_eq!(table.view_name(segment), expected);
    }

    #[rstest]
    fn parses_bare_and_detailed_entries() {
        let table = BrandRouteTable::from_json(
            r#"{ "Abrasives": 3, "Welding": { "categoryId": 9, "viewName": "Weld" } }"#,
        )
        .expect("valid table");
        assert_eq!(table.routes().len(), 2);
        assert_eq!(table.view_name("Abrasives"), "Abrasives");
        assert_eq!(table.view_name("Welding"), "Weld");
        assert_eq!(table.lookup("welding").map(|r| r.category_id), Some(9));
    }

    #[rstest]
    fn rejects_case_duplicates() {
        let err = BrandRouteTable::from_json(r#"{ "Abrasives": 1, "abrasives": 2 }"#)
            .expect_err("duplicate routes");
        assert!(matches!(err, BrandRouteTableError::Duplicate(_)));
    }

    #[rstest]
    fn rejects_malformed_documents() {
        let err = BrandRouteTable::from_json("[1, 2]").expect_err("not an object");
        assert!(matches!(err, BrandRouteTableError::Parse(_)));
    }

    #[rstest]
    fn verify_reports_missing_and_renamed_categories() {
        let table = BrandRouteTable::default();
        let categories = vec![
            category(1, "Abrasives"),
            category(2, "Cutting Tools"),
            category(3, "Hand Tools"),
        ];
        let mismatches = table.verify(&categories);
        assert_eq!(
            mismatches,
            vec![
                BrandRouteMismatch::RenamedCategory {
                    route: "Pneumatic".to_owned(),
                    category_id: 3,
                    stored_name: "Hand Tools".to_owned(),
                },
                BrandRouteMismatch::MissingCategory {
                    route: "PowerTools".to_owned(),
                    category_id: 4,
                },
            ]
        );
    }
}
