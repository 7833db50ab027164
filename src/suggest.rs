//! Replacement suggestions
//!
//! Given a hamper line the caller wants to swap out, propose alternative
//! items from the same category under the same active filters. Invoked
//! per line, on demand, independently of the fill engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::{catalog::Catalog, filters::RowFilter};

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 7;

/// Date format used when presenting expiry dates, e.g. `14-Dec-2026`.
pub const EXPIRY_DISPLAY_FORMAT: &str = "%d-%b-%Y";

/// One proposed alternative item.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Name of the alternative item.
    pub name: String,

    /// Unit price of the alternative.
    pub price: Decimal,

    /// Units currently available.
    pub available_units: u32,

    /// Expiry date of the alternative.
    pub expiry: NaiveDate,

    /// Brand of the alternative.
    pub brand: String,
}

impl Suggestion {
    /// The expiry date rendered in the catalog's display format.
    #[must_use]
    pub fn formatted_expiry(&self) -> String {
        self.expiry.format(EXPIRY_DISPLAY_FORMAT).to_string()
    }
}

/// Propose up to [`MAX_SUGGESTIONS`] alternatives for an item.
///
/// Rows must share the category, pass every active filter and the expiry
/// window, and must not be the excluded item itself. Results come back
/// cheapest first; an empty list is a valid "no alternatives" answer.
#[must_use]
pub fn suggest(
    catalog: &Catalog,
    category: &str,
    excluded_item: &str,
    filter: &RowFilter,
    today: NaiveDate,
) -> SmallVec<[Suggestion; MAX_SUGGESTIONS]> {
    let mut rows: Vec<_> = catalog
        .iter()
        .filter(|row| {
            row.category == category && row.name != excluded_item && filter.matches(row, today)
        })
        .collect();

    // Stable sort keeps catalog order for equal prices.
    rows.sort_by(|a, b| a.price.cmp(&b.price));

    rows.into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|row| Suggestion {
            name: row.name.clone(),
            price: row.price,
            available_units: row.available_units,
            expiry: row.expiry,
            brand: row.brand.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        expiry::ExpiryWindow,
        testing::{date, row, test_date},
    };

    use super::*;

    fn wide_filter(catalog: &Catalog) -> RowFilter {
        RowFilter::allowing_all(catalog, ExpiryWindow::new(0, 3650))
    }

    #[test]
    fn excludes_the_replaced_item_and_other_categories() {
        let catalog = Catalog::new(vec![
            row("Snacks", "Granola", "120", 4, "2026-12-01"),
            row("Snacks", "Trail Mix", "80", 4, "2026-12-01"),
            row("Pantry", "Rice", "60", 4, "2026-12-01"),
        ]);
        let filter = wide_filter(&catalog);

        let suggestions = suggest(&catalog, "Snacks", "Granola", &filter, test_date());
        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["Trail Mix"]);
    }

    #[test]
    fn returns_at_most_seven_cheapest_first() {
        let mut rows = Vec::new();
        for (i, price) in ["90", "30", "70", "10", "50", "80", "20", "60", "40"]
            .iter()
            .enumerate()
        {
            rows.push(row("Snacks", &format!("Item {i}"), price, 3, "2026-12-01"));
        }
        let catalog = Catalog::new(rows);
        let filter = wide_filter(&catalog);

        let suggestions = suggest(&catalog, "Snacks", "none of these", &filter, test_date());
        let prices: Vec<Decimal> = suggestions.iter().map(|s| s.price).collect();

        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(
            prices,
            [10, 20, 30, 40, 50, 60, 70]
                .map(Decimal::from)
                .to_vec()
        );
    }

    #[test]
    fn empty_result_is_valid() {
        let catalog = Catalog::new(vec![row("Snacks", "Granola", "120", 4, "2026-12-01")]);
        let filter = wide_filter(&catalog);

        let suggestions = suggest(&catalog, "Snacks", "Granola", &filter, test_date());

        assert!(suggestions.is_empty());
    }

    #[test]
    fn window_and_filters_apply() {
        let catalog = Catalog::new(vec![
            row("Snacks", "Granola", "120", 4, "2026-12-01"),
            row("Snacks", "Short Dated", "20", 4, "2026-09-01"),
        ]);
        let mut filter = wide_filter(&catalog);
        filter.window = ExpiryWindow::new(30, 365);

        let suggestions = suggest(&catalog, "Snacks", "Granola", &filter, date("2026-08-26"));

        assert!(suggestions.is_empty());
    }

    #[test]
    fn formats_expiry_for_display() {
        let catalog = Catalog::new(vec![
            row("Snacks", "Granola", "120", 4, "2026-12-01"),
            row("Snacks", "Trail Mix", "80", 4, "2026-12-14"),
        ]);
        let filter = wide_filter(&catalog);

        let suggestions = suggest(&catalog, "Snacks", "Granola", &filter, test_date());

        assert_eq!(
            suggestions.first().map(Suggestion::formatted_expiry),
            Some("14-Dec-2026".to_string())
        );
    }
}
