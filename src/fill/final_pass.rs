//! Final-fill pass.
//!
//! A last, best-effort sweep that spends whatever slack the refinement
//! loop left behind. Unlike the loop, this is a single pass: candidates
//! are gathered against the remaining-budget snapshot, walked largest
//! line cost first, and each acceptance is checked against the running
//! total. The two phases deliberately keep their different checks.

use rust_decimal::Decimal;
use tracing::trace;

use crate::candidates::{Candidate, CandidatePool};

use super::draft::Draft;

/// Spend any remaining slack in one descending sweep.
pub(super) fn fill_remaining<'a>(draft: &mut Draft<'a>, pool: &CandidatePool<'a>, budget: Decimal) {
    let remaining = budget - draft.total();
    if remaining <= Decimal::ZERO {
        return;
    }

    let mut affordable: Vec<&Candidate<'a>> = pool
        .iter()
        .filter(|candidate| match draft.quantity_of(candidate.key()) {
            None => candidate.line_cost <= remaining,
            Some(held) => {
                candidate.quantity > held
                    && candidate.row.price * Decimal::from(candidate.quantity - held) <= remaining
            }
        })
        .collect();

    // Stable sort: ties keep pool order.
    affordable.sort_by(|a, b| b.line_cost.cmp(&a.line_cost));

    for candidate in affordable {
        match draft.quantity_of(candidate.key()) {
            None => {
                if draft.total() + candidate.line_cost <= budget {
                    draft.accept(candidate);
                    trace!(name = %candidate.row.name, quantity = candidate.quantity, "final pass added line");
                }
            }
            Some(held) if candidate.quantity > held => {
                let increment = candidate.row.price * Decimal::from(candidate.quantity - held);

                if draft.total() + increment <= budget {
                    draft.accept(candidate);
                    trace!(name = %candidate.row.name, quantity = candidate.quantity, "final pass bumped line");
                }
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        fill::{refine::refine, strategies::best_of_three},
        testing::row,
    };

    use super::*;

    #[test]
    fn spends_slack_on_the_largest_fitting_lines() {
        let saffron = row("Pantry", "Saffron", "400", 1, "2026-12-01");
        let khakhra = row("Snacks", "Khakhra", "30", 5, "2026-12-01");
        let papad = row("Snacks", "Papad", "10", 5, "2026-12-01");
        let pool = CandidatePool::build(&[&saffron, &khakhra, &papad]);
        let budget = Decimal::from(500);

        let mut draft = Draft::new();
        if let Some(only) = pool.for_key(("Pantry", "Saffron")).next() {
            draft.accept(only);
        }
        assert_eq!(draft.total(), Decimal::from(400));

        fill_remaining(&mut draft, &pool, budget);

        // The 100 of slack goes to 3 x khakhra (90, largest fitting line)
        // and then 1 x papad (10) under the running total.
        assert_eq!(draft.total(), Decimal::from(500));
        assert_eq!(draft.quantity_of(("Snacks", "Khakhra")), Some(3));
        assert_eq!(draft.quantity_of(("Snacks", "Papad")), Some(1));
    }

    #[test]
    fn does_nothing_without_slack() {
        let ghee = row("Pantry", "Ghee", "100", 5, "2026-12-01");
        let pool = CandidatePool::build(&[&ghee]);
        let budget = Decimal::from(300);

        let mut draft = best_of_three(&pool, budget);
        refine(&mut draft, &pool, budget);
        assert_eq!(draft.total(), budget);

        fill_remaining(&mut draft, &pool, budget);

        assert_eq!(draft.total(), budget);
        assert_eq!(draft.quantity_of(("Pantry", "Ghee")), Some(3));
    }

    #[test]
    fn never_exceeds_the_budget() {
        let tea = row("Beverages", "Tea", "40", 10, "2026-12-01");
        let coffee = row("Beverages", "Coffee", "35", 10, "2026-12-01");
        let pool = CandidatePool::build(&[&tea, &coffee]);
        let budget = Decimal::from(100);

        let mut draft = best_of_three(&pool, budget);
        refine(&mut draft, &pool, budget);
        fill_remaining(&mut draft, &pool, budget);

        assert!(draft.total() <= budget);
    }
}
