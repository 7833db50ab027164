//! Working state for one fill call.
//!
//! A draft keeps the ordered lines chosen so far plus a key index owning
//! the authoritative quantity per (category, name). Accepting a candidate
//! for a key that is already present overwrites that line's quantity in
//! place, so a hamper never carries two lines with the same key and
//! display order is first-acceptance order.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{
    candidates::Candidate,
    catalog::CatalogRow,
    hamper::{Hamper, HamperLine},
};

#[derive(Debug)]
struct DraftLine<'a> {
    row: &'a CatalogRow,
    quantity: u32,
}

/// In-progress hamper selection.
#[derive(Debug, Default)]
pub(super) struct Draft<'a> {
    lines: Vec<DraftLine<'a>>,
    index: FxHashMap<(&'a str, &'a str), usize>,
    total: Decimal,
}

impl<'a> Draft<'a> {
    pub(super) fn new() -> Self {
        Draft::default()
    }

    /// Running total cost of all draft lines.
    pub(super) fn total(&self) -> Decimal {
        self.total
    }

    pub(super) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(super) fn contains_key(&self, key: (&'a str, &'a str)) -> bool {
        self.index.contains_key(&key)
    }

    /// Quantity currently chosen for a key, if any.
    pub(super) fn quantity_of(&self, key: (&'a str, &'a str)) -> Option<u32> {
        self.line(key).map(|line| line.quantity)
    }

    /// Cost of the line currently chosen for a key; zero when absent.
    pub(super) fn line_cost_of(&self, key: (&'a str, &'a str)) -> Decimal {
        self.line(key)
            .map_or(Decimal::ZERO, |line| line.row.price * Decimal::from(line.quantity))
    }

    /// Accept a candidate, overwriting any line already held for its key.
    pub(super) fn accept(&mut self, candidate: &Candidate<'a>) {
        if let Some(&position) = self.index.get(&candidate.key()) {
            if let Some(line) = self.lines.get_mut(position) {
                self.total -= line.row.price * Decimal::from(line.quantity);
                self.total += candidate.line_cost;
                line.quantity = candidate.quantity;
            }
        } else {
            self.index.insert(candidate.key(), self.lines.len());
            self.lines.push(DraftLine {
                row: candidate.row,
                quantity: candidate.quantity,
            });
            self.total += candidate.line_cost;
        }
    }

    /// The current (key, quantity) pairs in acceptance order, detached
    /// from the draft borrow so callers can mutate while scanning.
    pub(super) fn snapshot(&self) -> Vec<((&'a str, &'a str), u32)> {
        self.lines
            .iter()
            .map(|line| (line.row.key(), line.quantity))
            .collect()
    }

    /// Freeze the draft into the hamper handed to the caller.
    pub(super) fn into_hamper(self) -> Hamper {
        let total = self.total;
        let lines = self
            .lines
            .into_iter()
            .map(|line| HamperLine::new(line.row.category.clone(), line.row.name.clone(), line.quantity))
            .collect();

        Hamper { lines, total }
    }

    fn line(&self, key: (&'a str, &'a str)) -> Option<&DraftLine<'a>> {
        self.index
            .get(&key)
            .and_then(|&position| self.lines.get(position))
    }
}
