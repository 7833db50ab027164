//! Refinement loop.
//!
//! Grows the chosen fill toward the target utilization one structural
//! change at a time: bump the quantity of an existing line if any bump
//! fits the remaining budget, otherwise append the largest affordable new
//! item. Stops at the target, at the iteration ceiling, or as soon as an
//! iteration changes nothing.

use rust_decimal::Decimal;
use tracing::trace;

use crate::candidates::{Candidate, CandidatePool};

use super::draft::Draft;

/// Upper bound on refinement iterations.
pub(super) const MAX_REFINE_ITERATIONS: usize = 100;

/// Fraction of the budget the loop tries to reach.
fn target(budget: Decimal) -> Decimal {
    budget * Decimal::new(99, 2)
}

/// Run the refinement loop. The draft total never exceeds the budget.
pub(super) fn refine<'a>(draft: &mut Draft<'a>, pool: &CandidatePool<'a>, budget: Decimal) {
    let target = target(budget);

    for iteration in 0..MAX_REFINE_ITERATIONS {
        if draft.total() >= target {
            break;
        }

        let remaining = budget - draft.total();
        let improved =
            bump_first_line(draft, pool, remaining) || add_largest_new(draft, pool, remaining);

        trace!(iteration, total = %draft.total(), improved, "refinement step");

        if !improved {
            break;
        }
    }
}

/// Bump the first line, in acceptance order, that has a strictly larger
/// quantity option whose incremental cost fits the remaining budget. The
/// smallest such quantity wins.
fn bump_first_line<'a>(draft: &mut Draft<'a>, pool: &CandidatePool<'a>, remaining: Decimal) -> bool {
    for (key, held) in draft.snapshot() {
        for candidate in pool.for_key(key) {
            if candidate.quantity <= held {
                continue;
            }

            let increment = candidate.row.price * Decimal::from(candidate.quantity - held);

            if increment <= remaining {
                draft.accept(candidate);
                return true;
            }
        }
    }

    false
}

/// Append the affordable candidate with the largest line cost among keys
/// not yet in the hamper. Strict comparison keeps the earliest pool entry
/// on ties.
fn add_largest_new<'a>(draft: &mut Draft<'a>, pool: &CandidatePool<'a>, remaining: Decimal) -> bool {
    let mut best: Option<&Candidate<'a>> = None;

    for candidate in pool.iter() {
        if draft.contains_key(candidate.key()) || candidate.line_cost > remaining {
            continue;
        }

        if best.is_none_or(|current| candidate.line_cost > current.line_cost) {
            best = Some(candidate);
        }
    }

    match best {
        Some(candidate) => {
            draft.accept(candidate);
            true
        }
        None => false,
    }
}
