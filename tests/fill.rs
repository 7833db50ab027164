//! Integration tests for the budget-fill engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use testresult::TestResult;

use hamper::{
    candidates::MAX_LINE_QUANTITY,
    catalog::{Catalog, CatalogRow},
    expiry::{BoxType, ExpiryWindow},
    fill::{FillError, fill},
    filters::HamperFilter,
    fixtures::Fixture,
};

fn date(iso: &str) -> NaiveDate {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").expect("valid ISO date in test")
}

fn today() -> NaiveDate {
    date("2026-08-26")
}

fn row(category: &str, name: &str, price: i64, available_units: u32) -> CatalogRow {
    CatalogRow {
        category: category.to_string(),
        name: name.to_string(),
        price: Decimal::from(price),
        available_units,
        expiry: date("2026-12-01"),
        brand: "Hearth".to_string(),
        inventory_holding: "Warehouse".to_string(),
        status: "Active".to_string(),
        shipping_weight_grams: Decimal::from(100),
        sku: format!("SKU-{name}"),
    }
}

fn wide_filter(catalog: &Catalog) -> HamperFilter {
    HamperFilter::allowing_all(catalog, ExpiryWindow::new(0, 3650))
}

#[test]
fn single_item_stops_below_the_budget() -> TestResult {
    let catalog = Catalog::new(vec![row("Pantry", "Ghee", 100, 5)]);
    let filter = wide_filter(&catalog);

    let hamper = fill(&catalog, &filter, Decimal::from(250), today())?;

    // 3 x 100 = 300 would overshoot; 2 x 100 is the closest feasible fill.
    assert_eq!(hamper.total, Decimal::from(200));
    assert_eq!(hamper.lines.len(), 1);
    assert_eq!(hamper.lines.first().map(|l| l.quantity), Some(2));

    Ok(())
}

#[test]
fn two_item_pool_reaches_the_strategy_total() -> TestResult {
    let catalog = Catalog::new(vec![
        row("Pantry", "Poha", 60, 10),
        row("Pantry", "Honey", 90, 10),
    ]);
    let filter = wide_filter(&catalog);

    let hamper = fill(&catalog, &filter, Decimal::from(200), today())?;

    assert_eq!(hamper.total, Decimal::from(180));

    Ok(())
}

#[test]
fn exact_fill_is_found_when_granularity_allows() -> TestResult {
    let catalog = Catalog::new(vec![row("Snacks", "Papad", 10, 20)]);
    let filter = wide_filter(&catalog);

    let hamper = fill(&catalog, &filter, Decimal::from(100), today())?;

    assert_eq!(hamper.total, Decimal::from(100));
    assert_eq!(hamper.lines.first().map(|l| l.quantity), Some(10));

    Ok(())
}

#[test]
fn inverted_window_filters_out_everything() -> TestResult {
    let catalog = Catalog::new(vec![row("Pantry", "Ghee", 100, 5)]);
    let filter = HamperFilter::allowing_all(&catalog, ExpiryWindow::new(365, 30));

    let hamper = fill(&catalog, &filter, Decimal::from(1000), today())?;

    assert!(hamper.is_empty());
    assert_eq!(hamper.total, Decimal::ZERO);

    Ok(())
}

#[test]
fn budget_below_the_cheapest_unit_yields_empty() -> TestResult {
    let catalog = Catalog::new(vec![row("Pantry", "Ghee", 100, 5)]);
    let filter = wide_filter(&catalog);

    let hamper = fill(&catalog, &filter, Decimal::from(50), today())?;

    assert!(hamper.is_empty());
    assert_eq!(hamper.total, Decimal::ZERO);

    Ok(())
}

#[test]
fn non_positive_budget_is_an_error() {
    let catalog = Catalog::new(vec![row("Pantry", "Ghee", 100, 5)]);
    let filter = wide_filter(&catalog);

    let result = fill(&catalog, &filter, Decimal::from(-5), today());

    assert!(matches!(result, Err(FillError::NonPositiveBudget { .. })));
}

#[test]
fn total_never_exceeds_any_budget() -> TestResult {
    let catalog = Catalog::new(vec![
        row("Pantry", "Poha", 60, 10),
        row("Pantry", "Honey", 90, 7),
        row("Snacks", "Khakhra", 35, 20),
        row("Snacks", "Trail Mix", 240, 4),
        row("Beverages", "Green Tea", 150, 14),
    ]);
    let filter = wide_filter(&catalog);

    let mut budget = Decimal::from(50);
    while budget < Decimal::from(2000) {
        let hamper = fill(&catalog, &filter, budget, today())?;

        assert!(
            hamper.total <= budget,
            "total {} exceeded budget {budget}",
            hamper.total
        );

        budget += Decimal::from(73);
    }

    Ok(())
}

#[test]
fn no_hamper_holds_duplicate_keys() -> TestResult {
    let catalog = Catalog::new(vec![
        row("Pantry", "Poha", 60, 10),
        row("Pantry", "Honey", 90, 7),
        row("Snacks", "Khakhra", 35, 20),
    ]);
    let filter = wide_filter(&catalog);

    let hamper = fill(&catalog, &filter, Decimal::from(700), today())?;

    let mut keys: Vec<(&str, &str)> = hamper.iter().map(|line| line.key()).collect();
    keys.sort_unstable();
    let before = keys.len();
    keys.dedup();

    assert_eq!(keys.len(), before);

    Ok(())
}

#[test]
fn quantities_respect_availability_and_the_cap() -> TestResult {
    let catalog = Catalog::new(vec![
        row("Snacks", "Papad", 2, 50),
        row("Pantry", "Poha", 10, 3),
    ]);
    let filter = wide_filter(&catalog);

    let hamper = fill(&catalog, &filter, Decimal::from(10_000), today())?;

    for line in hamper.iter() {
        assert!(line.quantity >= 1);
        assert!(line.quantity <= MAX_LINE_QUANTITY);
        if line.name == "Poha" {
            assert!(line.quantity <= 3);
        }
    }

    Ok(())
}

#[test]
fn identical_inputs_give_identical_hampers() -> TestResult {
    let catalog = Catalog::new(vec![
        row("Pantry", "Poha", 60, 10),
        row("Pantry", "Honey", 90, 7),
        row("Snacks", "Khakhra", 35, 20),
        row("Beverages", "Green Tea", 150, 14),
    ]);
    let filter = wide_filter(&catalog);
    let budget = Decimal::from(1234);

    let first = fill(&catalog, &filter, budget, today())?;
    let second = fill(&catalog, &filter, budget, today())?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn fixture_catalog_fills_close_to_budget() -> TestResult {
    let fixture = Fixture::with_base_path(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"));
    let catalog = fixture.load_catalog("staples")?;
    let filter = HamperFilter::allowing_all(&catalog, BoxType::GiftBox.window());
    let budget = Decimal::from(2000);

    let hamper = fill(&catalog, &filter, budget, today())?;

    assert!(!hamper.is_empty());
    assert!(hamper.total <= budget);
    assert!(
        hamper.utilization(budget) >= Decimal::from(95),
        "utilization {} below expectation",
        hamper.utilization(budget)
    );

    // The expired row must never be selected under the gift-box window.
    assert!(hamper.iter().all(|line| line.name != "Expired Biscuits"));

    Ok(())
}
