//! Hamper
//!
//! A budget-fill selection engine for catalog bundles. Given a budget, a
//! set of inventory/freshness/brand filters and a read-only catalog
//! snapshot, the engine assembles a hamper whose total cost best fills
//! the budget, and can propose replacement items for any chosen line.
//!
//! The engine is a pure function of its inputs: single-threaded,
//! deterministic, with every phase a bounded pass. All hamper edits after
//! a fill are caller-side operations on the returned value.

pub mod candidates;
pub mod catalog;
pub mod expiry;
pub mod fill;
pub mod filters;
pub mod fixtures;
pub mod hamper;
pub mod prelude;
pub mod suggest;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;
