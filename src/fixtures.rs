//! Fixtures
//!
//! YAML catalog ingestion for demos and tests. Raw rows arrive with every
//! field optional and stringly typed, the way the upstream sheet feed
//! delivers them; conversion coerces numerics and dates and silently
//! drops any row missing a required field, mirroring the inventory
//! collaborator's pre-filtering contract.

use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogRow, FALLBACK_CATEGORY},
    suggest::EXPIRY_DISPLAY_FORMAT,
};

/// Brand recorded for rows whose source data carried none.
const FALLBACK_BRAND: &str = "Unknown";

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    catalog: Vec<RawRow>,
}

/// One row as it appears in the fixture file. All fields optional; the
/// conversion below decides which absences are fatal to the row.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    name: Option<String>,
    category: Option<String>,
    brand: Option<String>,
    sku: Option<String>,
    mrp: Option<String>,
    available_units: Option<String>,
    expiry_date: Option<String>,
    inventory_holding: Option<String>,
    product_status: Option<String>,
    shipping_weight_grams: Option<String>,
}

impl RawRow {
    /// Coerce into a typed row; `None` drops the row silently.
    ///
    /// Required: name, a parseable non-missing price, available units,
    /// expiry date, inventory holding and status. Category, brand, SKU
    /// and weight fall back to defaults instead.
    fn into_row(self) -> Option<CatalogRow> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        let price = self.mrp?.trim().parse::<Decimal>().ok()?;
        let available_units = self.available_units?.trim().parse::<u32>().ok()?;
        let expiry =
            NaiveDate::parse_from_str(self.expiry_date?.trim(), EXPIRY_DISPLAY_FORMAT).ok()?;
        let inventory_holding = self.inventory_holding?;
        let status = self.product_status?;

        Some(CatalogRow {
            category: self
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            name,
            price,
            available_units,
            expiry,
            brand: self
                .brand
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_BRAND.to_string()),
            inventory_holding,
            status,
            shipping_weight_grams: self
                .shipping_weight_grams
                .and_then(|w| w.trim().parse::<Decimal>().ok())
                .unwrap_or(Decimal::ZERO),
            sku: self.sku.unwrap_or_default(),
        })
    }
}

/// Loader for catalog fixture sets under a base path.
#[derive(Debug)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Fixture::new()
    }
}

impl Fixture {
    /// A loader rooted at the crate's `./fixtures` directory.
    #[must_use]
    pub fn new() -> Self {
        Fixture::with_base_path("./fixtures")
    }

    /// A loader rooted at a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Fixture {
            base_path: base_path.into(),
        }
    }

    /// Load the catalog fixture set `<base>/catalog/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed.
    /// Rows that fail coercion are dropped, not reported.
    pub fn load_catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Self::parse_catalog(&contents)
    }

    /// Parse a catalog fixture from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Yaml`] if the document is malformed.
    pub fn parse_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;
        let rows: Vec<CatalogRow> = fixture
            .catalog
            .into_iter()
            .filter_map(RawRow::into_row)
            .collect();

        Ok(Catalog::new(rows))
    }
}
