//! Catalog
//!
//! A read-only snapshot of the inventory table. The engine treats the
//! catalog as immutable for the duration of one fill or suggestion call;
//! all mutation stays with the upstream inventory collaborator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{filters::HamperFilter, hamper::HamperLine};

/// Category assigned to rows whose source data carried none.
///
/// Lines in this category are resolved by name alone, since the category
/// was never meaningful for them.
pub const FALLBACK_CATEGORY: &str = "Misc";

/// Errors related to catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A hamper line referenced an item that no longer exists in the
    /// catalog. Reported per line; other lines are unaffected.
    #[error("item {name:?} not found in catalog (category {category:?})")]
    ItemNotFound {
        /// Category of the unresolved line.
        category: String,
        /// Item name of the unresolved line.
        name: String,
    },
}

/// A single inventory row.
///
/// Rows with missing required fields never reach this type; the ingestion
/// layer drops them before construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Item category.
    pub category: String,

    /// Item name, unique within its category for selection purposes.
    pub name: String,

    /// Unit price. Non-negative for well-formed rows.
    pub price: Decimal,

    /// Units currently available.
    pub available_units: u32,

    /// Expiry date of the item.
    pub expiry: NaiveDate,

    /// Brand name.
    pub brand: String,

    /// Inventory-holding tag.
    pub inventory_holding: String,

    /// Product status tag.
    pub status: String,

    /// Shipping weight in grams.
    pub shipping_weight_grams: Decimal,

    /// Stock-keeping unit code.
    pub sku: String,
}

impl CatalogRow {
    /// Selection key of the row: its (category, name) pair.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.category, &self.name)
    }
}

/// An immutable inventory snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
}

impl Catalog {
    /// Create a catalog from its rows.
    #[must_use]
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Catalog { rows }
    }

    /// Iterate over all rows.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogRow> {
        self.rows.iter()
    }

    /// Number of rows in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the catalog has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows matching the given filter on the given day, in catalog order.
    #[must_use]
    pub fn filtered<'a>(&'a self, filter: &HamperFilter, today: NaiveDate) -> Vec<&'a CatalogRow> {
        self.rows
            .iter()
            .filter(|row| filter.matches(row, today))
            .collect()
    }

    /// Resolve a hamper line back to its catalog row.
    ///
    /// Prefers the exact (category, name) match. Lines in the fallback
    /// category, or whose category has no such item any more, resolve to
    /// the first row with a matching name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ItemNotFound`] if no row carries the
    /// line's item name.
    pub fn resolve(&self, line: &HamperLine) -> Result<&CatalogRow, CatalogError> {
        let by_name = || self.rows.iter().find(|row| row.name == line.name);

        let row = if line.category == FALLBACK_CATEGORY {
            by_name()
        } else {
            self.rows
                .iter()
                .find(|row| row.category == line.category && row.name == line.name)
                .or_else(by_name)
        };

        row.ok_or_else(|| CatalogError::ItemNotFound {
            category: line.category.clone(),
            name: line.name.clone(),
        })
    }
}
