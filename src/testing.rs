//! Shared helpers for unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::catalog::CatalogRow;

/// Parse an ISO date, panicking on bad test input.
pub(crate) fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("valid ISO date in test")
}

/// The reference "today" used across unit tests.
pub(crate) fn test_date() -> NaiveDate {
    date("2026-08-26")
}

/// Build a catalog row with sensible defaults for the fields a test does
/// not care about.
pub(crate) fn row(
    category: &str,
    name: &str,
    price: &str,
    available_units: u32,
    expiry_iso: &str,
) -> CatalogRow {
    CatalogRow {
        category: category.to_string(),
        name: name.to_string(),
        price: price.parse::<Decimal>().expect("valid price in test"),
        available_units,
        expiry: date(expiry_iso),
        brand: "Hearth".to_string(),
        inventory_holding: "Warehouse".to_string(),
        status: "Active".to_string(),
        shipping_weight_grams: Decimal::from(100),
        sku: format!("SKU-{name}"),
    }
}
