//! Candidate generation
//!
//! Expands each distinct (category, name) row of a filtered catalog view
//! into a bounded run of quantity options with precomputed line costs.
//! Candidates are ephemeral: they borrow the catalog rows and live only
//! for the duration of one fill call.

use std::ops::Range;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::catalog::CatalogRow;

/// Hard cap on the quantity of any single line, regardless of stock.
pub const MAX_LINE_QUANTITY: u32 = 20;

/// One (item, quantity) option under consideration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// The catalog row this option draws from.
    pub row: &'a CatalogRow,

    /// Quantity of units this option would place in the hamper.
    pub quantity: u32,

    /// Cost of the whole line: unit price times quantity.
    pub line_cost: Decimal,
}

impl<'a> Candidate<'a> {
    /// Selection key of the underlying row.
    #[must_use]
    pub fn key(&self) -> (&'a str, &'a str) {
        self.row.key()
    }
}

/// The expanded candidate pool for one fill call.
///
/// Candidates appear in generation order: rows in view order, quantities
/// ascending within a row. Every tie-break downstream refers back to this
/// order, which is what makes the engine deterministic.
#[derive(Debug, Default)]
pub struct CandidatePool<'a> {
    entries: Vec<Candidate<'a>>,
    by_key: FxHashMap<(&'a str, &'a str), Range<usize>>,
}

impl<'a> CandidatePool<'a> {
    /// Expand a filtered view into the candidate pool.
    ///
    /// Duplicate (category, name) rows collapse onto the first
    /// occurrence. Rows with a negative price, or with no sellable unit,
    /// are skipped rather than reported.
    #[must_use]
    pub fn build(rows: &[&'a CatalogRow]) -> Self {
        let mut pool = CandidatePool {
            entries: Vec::new(),
            by_key: FxHashMap::default(),
        };

        for &row in rows {
            if pool.by_key.contains_key(&row.key()) || row.price < Decimal::ZERO {
                continue;
            }

            let cap = row.available_units.min(MAX_LINE_QUANTITY);
            if cap == 0 {
                continue;
            }

            let start = pool.entries.len();
            for quantity in 1..=cap {
                pool.entries.push(Candidate {
                    row,
                    quantity,
                    line_cost: row.price * Decimal::from(quantity),
                });
            }
            pool.by_key.insert(row.key(), start..pool.entries.len());
        }

        pool
    }

    /// Iterate over candidates in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a>> {
        self.entries.iter()
    }

    /// Candidates for one key, in ascending quantity order.
    pub fn for_key(&self, key: (&str, &str)) -> impl Iterator<Item = &Candidate<'a>> {
        self.by_key
            .get(&key)
            .cloned()
            .and_then(|range| self.entries.get(range))
            .unwrap_or_default()
            .iter()
    }

    /// Number of candidates in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the pool holds no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
