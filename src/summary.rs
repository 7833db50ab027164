//! Hamper summary
//!
//! Caller-side presentation of a filled hamper. Lines are re-resolved
//! against the current catalog at build time, so a price change between
//! fill and display changes the displayed total. Quantities are clamped
//! to availability, and lines whose item has vanished from the catalog
//! are reported individually without failing the rest.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{
    catalog::Catalog,
    hamper::{Hamper, HamperLine},
    suggest::EXPIRY_DISPLAY_FORMAT,
};

/// One resolved, display-ready hamper line.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Item name.
    pub name: String,

    /// Stock-keeping unit code.
    pub sku: String,

    /// Expiry date of the item.
    pub expiry: NaiveDate,

    /// Quantity, clamped to the units currently available.
    pub quantity: u32,

    /// Unit price as currently listed.
    pub unit_price: Decimal,

    /// Units currently available.
    pub available_units: u32,

    /// Shipping weight per unit, in grams.
    pub unit_weight_grams: Decimal,
}

impl SummaryLine {
    /// Cost of the whole line at current prices.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Shipping weight of the whole line, in grams.
    #[must_use]
    pub fn line_weight_grams(&self) -> Decimal {
        self.unit_weight_grams * Decimal::from(self.quantity)
    }
}

/// A hamper resolved against the current catalog.
#[derive(Debug, Clone, Default)]
pub struct HamperSummary {
    lines: Vec<SummaryLine>,
    unresolved: Vec<HamperLine>,
}

impl HamperSummary {
    /// Resolve every hamper line against the catalog.
    ///
    /// Lines that no longer resolve are collected into
    /// [`HamperSummary::unresolved`] instead of aborting the build.
    #[must_use]
    pub fn build(catalog: &Catalog, hamper: &Hamper) -> Self {
        let mut summary = HamperSummary::default();

        for line in hamper.iter() {
            match catalog.resolve(line) {
                Ok(row) => summary.lines.push(SummaryLine {
                    name: row.name.clone(),
                    sku: row.sku.clone(),
                    expiry: row.expiry,
                    quantity: line.quantity.min(row.available_units),
                    unit_price: row.price,
                    available_units: row.available_units,
                    unit_weight_grams: row.shipping_weight_grams,
                }),
                Err(_) => summary.unresolved.push(line.clone()),
            }
        }

        summary
    }

    /// Resolved lines in hamper order.
    #[must_use]
    pub fn lines(&self) -> &[SummaryLine] {
        &self.lines
    }

    /// Lines that failed to resolve against the current catalog.
    #[must_use]
    pub fn unresolved(&self) -> &[HamperLine] {
        &self.unresolved
    }

    /// Total cost of all resolved lines at current prices.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.lines.iter().map(SummaryLine::line_total).sum()
    }

    /// Total shipping weight of all resolved lines, in grams.
    #[must_use]
    pub fn total_weight_grams(&self) -> Decimal {
        self.lines.iter().map(SummaryLine::line_weight_grams).sum()
    }

    /// Render the summary as a text table with a trailing TOTAL row.
    #[must_use]
    pub fn to_table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record([
            "Item Name",
            "SKU",
            "Expiry Date",
            "Qty",
            "Unit Price",
            "Available",
            "Line Total",
            "Weight (g)",
        ]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.sku.clone(),
                line.expiry.format(EXPIRY_DISPLAY_FORMAT).to_string(),
                line.quantity.to_string(),
                line.unit_price.to_string(),
                line.available_units.to_string(),
                line.line_total().to_string(),
                line.line_weight_grams().to_string(),
            ]);
        }

        builder.push_record([
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            self.total_cost().to_string(),
            self.total_weight_grams().to_string(),
        ]);

        let mut table = builder.build();
        table.with(Style::rounded());
        table.modify(Columns::new(3..), Alignment::right());

        table.to_string()
    }
}
