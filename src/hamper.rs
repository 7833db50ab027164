//! Hamper
//!
//! The result model handed back to the caller. A hamper is an ordered
//! list of (category, name, quantity) lines plus the total cost the
//! engine computed at fill time. The engine never touches a hamper after
//! returning it; edits, deletions and replacements are caller-side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One selected line of a hamper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HamperLine {
    /// Category of the selected item.
    pub category: String,

    /// Name of the selected item.
    pub name: String,

    /// Number of units selected.
    pub quantity: u32,
}

impl HamperLine {
    /// Create a line.
    #[must_use]
    pub fn new(category: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        HamperLine {
            category: category.into(),
            name: name.into(),
            quantity,
        }
    }

    /// Selection key of the line: its (category, name) pair.
    #[must_use]
    pub fn key(&self) -> (&str, &str) {
        (&self.category, &self.name)
    }
}

/// A filled hamper: ordered lines and the total cost at fill time.
///
/// Holds at most one line per (category, name) key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hamper {
    /// Selected lines, in acceptance order.
    pub lines: Vec<HamperLine>,

    /// Total cost of all lines, as priced at fill time.
    pub total: Decimal,
}

impl Hamper {
    /// An empty hamper with zero cost.
    #[must_use]
    pub fn empty() -> Self {
        Hamper::default()
    }

    /// Number of lines in the hamper.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the hamper holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &HamperLine> {
        self.lines.iter()
    }

    /// Budget utilization as a percentage of the given budget.
    ///
    /// Returns zero for a non-positive budget rather than dividing by it.
    #[must_use]
    pub fn utilization(&self, budget: Decimal) -> Decimal {
        if budget <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        self.total / budget * Decimal::from(100)
    }
}
