//! Expiry windows
//!
//! Freshness is expressed as a window of allowed days-until-expiry,
//! evaluated against a caller-supplied "today". Box types are named
//! presets for common windows.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// An inclusive `[min_days, max_days]` range of allowed days until expiry.
///
/// An inverted window (`min_days > max_days`) is not an error; it simply
/// matches no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryWindow {
    /// Minimum allowed days until expiry.
    pub min_days: i64,

    /// Maximum allowed days until expiry.
    pub max_days: i64,
}

impl ExpiryWindow {
    /// Create a window from its bounds.
    #[must_use]
    pub fn new(min_days: i64, max_days: i64) -> Self {
        ExpiryWindow { min_days, max_days }
    }

    /// Check whether an expiry date falls inside the window as of `today`.
    #[must_use]
    pub fn contains(&self, expiry: NaiveDate, today: NaiveDate) -> bool {
        let days_until_expiry = (expiry - today).num_days();

        self.min_days <= days_until_expiry && days_until_expiry <= self.max_days
    }
}

/// Named expiry-window presets tied to the kind of box being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BoxType {
    /// Long-dated items suitable for gifting.
    GiftBox,

    /// Mid-shelf-life items.
    GreenBox,

    /// Short-dated items sold at a discount.
    StealDeal,
}

impl BoxType {
    /// The expiry window this box type selects by default.
    #[must_use]
    pub fn window(&self) -> ExpiryWindow {
        match self {
            BoxType::GiftBox => ExpiryWindow::new(45, 730),
            BoxType::GreenBox => ExpiryWindow::new(40, 120),
            BoxType::StealDeal => ExpiryWindow::new(15, 60),
        }
    }
}
