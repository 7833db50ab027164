//! Budget fill
//!
//! The fill engine: turns (catalog snapshot, filters, budget, today) into
//! a hamper whose total cost best fills the budget. Three phases run in
//! sequence over one candidate pool: a best-of-three greedy strategy
//! pass, an iterative refinement loop, and a final single-sweep fill.
//! Each phase is a bounded, deterministic pass; the whole call is pure
//! with respect to the catalog.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{candidates::CandidatePool, catalog::Catalog, filters::HamperFilter, hamper::Hamper};

mod draft;
mod final_pass;
mod refine;
mod strategies;

/// Errors rejecting a fill request before any selection runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FillError {
    /// The requested budget was zero or negative.
    #[error("budget must be positive, got {budget}")]
    NonPositiveBudget {
        /// The rejected budget.
        budget: Decimal,
    },
}

/// Assemble a hamper that best fills `budget` from the catalog rows
/// matching `filter` as of `today`.
///
/// The returned total never exceeds the budget. An empty filtered pool,
/// or a budget below the cheapest single unit, yields an empty hamper
/// with zero cost rather than an error; callers should distinguish that
/// outcome from a populated result.
///
/// # Errors
///
/// Returns [`FillError::NonPositiveBudget`] if `budget <= 0`.
pub fn fill(
    catalog: &Catalog,
    filter: &HamperFilter,
    budget: Decimal,
    today: NaiveDate,
) -> Result<Hamper, FillError> {
    if budget <= Decimal::ZERO {
        return Err(FillError::NonPositiveBudget { budget });
    }

    let rows = catalog.filtered(filter, today);
    let pool = CandidatePool::build(&rows);

    if pool.is_empty() {
        debug!("no candidates after filtering; returning empty hamper");
        return Ok(Hamper::empty());
    }

    let mut draft = strategies::best_of_three(&pool, budget);
    refine::refine(&mut draft, &pool, budget);
    final_pass::fill_remaining(&mut draft, &pool, budget);

    let hamper = draft.into_hamper();

    debug!(
        lines = hamper.len(),
        total = %hamper.total,
        utilization = %hamper.utilization(budget),
        "hamper filled"
    );

    Ok(hamper)
}

#[cfg(test)]
mod tests {
    use crate::{
        expiry::ExpiryWindow,
        testing::{row, test_date},
    };

    use super::*;

    fn wide_filter(catalog: &Catalog) -> HamperFilter {
        HamperFilter::allowing_all(catalog, ExpiryWindow::new(0, 3650))
    }

    #[test]
    fn non_positive_budget_is_rejected() {
        let catalog = Catalog::new(vec![row("Snacks", "Granola", "120", 4, "2026-12-01")]);
        let filter = wide_filter(&catalog);

        let err = fill(&catalog, &filter, Decimal::ZERO, test_date());

        assert_eq!(
            err,
            Err(FillError::NonPositiveBudget {
                budget: Decimal::ZERO
            })
        );
    }

    #[test]
    fn empty_catalog_yields_empty_hamper() -> testresult::TestResult {
        let catalog = Catalog::default();
        let filter = wide_filter(&catalog);

        let hamper = fill(&catalog, &filter, Decimal::from(1000), test_date())?;

        assert!(hamper.is_empty());
        assert_eq!(hamper.total, Decimal::ZERO);

        Ok(())
    }
}
