//! Strategy runner.
//!
//! Three independent single-pass greedy fills over different orderings of
//! the candidate pool, approximating different trade-offs of a bounded
//! multiple-choice knapsack: many cheap lines, best unit value, or few
//! expensive lines. None is individually optimal; the best feasible of
//! the three wins.

use rust_decimal::Decimal;
use tracing::debug;

use crate::candidates::{Candidate, CandidatePool};

use super::draft::Draft;

/// Acceptance ceiling multiplier for the relaxed descending strategy.
fn relaxed_ceiling(budget: Decimal) -> Decimal {
    budget * Decimal::new(102, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Candidates by line cost, ascending.
    CostAscending,

    /// Candidates by unit price, ascending.
    UnitPriceAscending,

    /// Candidates by line cost, descending, with a 1.02x ceiling.
    CostDescendingRelaxed,
}

/// Declaration order doubles as the tie-break order for best-of-three.
const STRATEGIES: [Strategy; 3] = [
    Strategy::CostAscending,
    Strategy::UnitPriceAscending,
    Strategy::CostDescendingRelaxed,
];

impl Strategy {
    /// Pool candidates in this strategy's walk order. All sorts are
    /// stable, so ties keep generation order.
    fn ordered<'p, 'a>(self, pool: &'p CandidatePool<'a>) -> Vec<&'p Candidate<'a>> {
        let mut candidates: Vec<&Candidate<'_>> = pool.iter().collect();

        match self {
            Strategy::CostAscending => candidates.sort_by(|a, b| a.line_cost.cmp(&b.line_cost)),
            Strategy::UnitPriceAscending => {
                candidates.sort_by(|a, b| a.row.price.cmp(&b.row.price));
            }
            Strategy::CostDescendingRelaxed => {
                candidates.sort_by(|a, b| b.line_cost.cmp(&a.line_cost));
            }
        }

        candidates
    }

    fn ceiling(self, budget: Decimal) -> Decimal {
        match self {
            Strategy::CostAscending | Strategy::UnitPriceAscending => budget,
            Strategy::CostDescendingRelaxed => relaxed_ceiling(budget),
        }
    }
}

/// Run a single greedy fill over the strategy's ordering.
fn run<'a>(strategy: Strategy, pool: &CandidatePool<'a>, budget: Decimal) -> Draft<'a> {
    let ceiling = strategy.ceiling(budget);
    let mut draft = Draft::new();

    for candidate in strategy.ordered(pool) {
        // Never downgrade a key that already holds at least this quantity.
        if draft
            .quantity_of(candidate.key())
            .is_some_and(|held| held >= candidate.quantity)
        {
            continue;
        }

        let hypothetical = draft.total() - draft.line_cost_of(candidate.key()) + candidate.line_cost;

        if hypothetical <= ceiling {
            draft.accept(candidate);
        }
    }

    draft
}

/// Evaluate all three strategies and keep the largest feasible total.
///
/// The relaxed strategy may accumulate past the budget; infeasible
/// results are filtered out here. Ties keep the earlier strategy. When no
/// strategy stays within budget the returned draft is empty.
pub(super) fn best_of_three<'a>(pool: &CandidatePool<'a>, budget: Decimal) -> Draft<'a> {
    let mut best = Draft::new();

    for strategy in STRATEGIES {
        let draft = run(strategy, pool, budget);

        debug!(?strategy, total = %draft.total(), lines = draft.len(), "strategy evaluated");

        if draft.total() <= budget && draft.total() > best.total() {
            best = draft;
        }
    }

    best
}
