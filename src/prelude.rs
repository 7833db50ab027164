//! Hamper prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    candidates::{Candidate, CandidatePool, MAX_LINE_QUANTITY},
    catalog::{Catalog, CatalogError, CatalogRow, FALLBACK_CATEGORY},
    expiry::{BoxType, ExpiryWindow},
    fill::{FillError, fill},
    filters::{HamperFilter, RowFilter},
    fixtures::{Fixture, FixtureError},
    hamper::{Hamper, HamperLine},
    suggest::{MAX_SUGGESTIONS, Suggestion, suggest},
    summary::{HamperSummary, SummaryLine},
};
