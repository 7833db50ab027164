//! Row filters
//!
//! Predicates the caller applies to the catalog before candidate
//! generation, and again when asking for replacement suggestions.
//! Set membership follows the upstream dashboard's multi-select
//! semantics: a row qualifies only if its value is listed, so an empty
//! set matches nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Catalog, CatalogRow},
    expiry::ExpiryWindow,
};

/// Category-independent row predicates: inventory holding, status, brand
/// and the expiry window. Used directly by the replacement engine, where
/// the category is fixed separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    /// Allowed inventory-holding tags.
    pub inventory_holdings: Vec<String>,

    /// Allowed product-status tags.
    pub statuses: Vec<String>,

    /// Allowed brand names.
    pub brands: Vec<String>,

    /// Allowed days-until-expiry window.
    pub window: ExpiryWindow,
}

impl RowFilter {
    /// Check whether a row passes every predicate as of `today`.
    #[must_use]
    pub fn matches(&self, row: &CatalogRow, today: NaiveDate) -> bool {
        self.inventory_holdings.contains(&row.inventory_holding)
            && self.statuses.contains(&row.status)
            && self.brands.contains(&row.brand)
            && self.window.contains(row.expiry, today)
    }

    /// A filter admitting every holding, status and brand present in the
    /// catalog, restricted only by the expiry window.
    #[must_use]
    pub fn allowing_all(catalog: &Catalog, window: ExpiryWindow) -> Self {
        RowFilter {
            inventory_holdings: distinct(catalog, |row| &row.inventory_holding),
            statuses: distinct(catalog, |row| &row.status),
            brands: distinct(catalog, |row| &row.brand),
            window,
        }
    }
}

/// The full fill-call filter: a category set on top of [`RowFilter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HamperFilter {
    /// Allowed categories.
    pub categories: Vec<String>,

    /// Category-independent predicates.
    pub rows: RowFilter,
}

impl HamperFilter {
    /// Create a filter from a category set and row predicates.
    #[must_use]
    pub fn new(categories: Vec<String>, rows: RowFilter) -> Self {
        HamperFilter { categories, rows }
    }

    /// A filter admitting every category and row value present in the
    /// catalog, restricted only by the expiry window.
    #[must_use]
    pub fn allowing_all(catalog: &Catalog, window: ExpiryWindow) -> Self {
        HamperFilter {
            categories: distinct(catalog, |row| &row.category),
            rows: RowFilter::allowing_all(catalog, window),
        }
    }

    /// Check whether a row passes the category set and every row
    /// predicate as of `today`.
    #[must_use]
    pub fn matches(&self, row: &CatalogRow, today: NaiveDate) -> bool {
        self.categories.contains(&row.category) && self.rows.matches(row, today)
    }
}

/// Distinct values of one row field, sorted for reproducible filters.
fn distinct(catalog: &Catalog, field: impl Fn(&CatalogRow) -> &String) -> Vec<String> {
    let mut values: Vec<String> = catalog.iter().map(|row| field(row).clone()).collect();

    values.sort();
    values.dedup();

    values
}
