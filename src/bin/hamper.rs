//! Demo CLI for the hamper engine.
//!
//! Fills a hamper from a fixture catalog and prints the summary table,
//! or lists replacement suggestions for one item. Purely presentational;
//! all selection logic lives in the library.

use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use hamper::prelude::*;

/// Assemble a budget-filling hamper from a fixture catalog.
#[derive(Debug, Parser)]
#[command(name = "hamper", version)]
struct Args {
    /// Budget to fill.
    #[arg(short, long, default_value = "1000")]
    budget: Decimal,

    /// Box type preset supplying the expiry window.
    #[arg(long, value_enum, default_value = "gift-box")]
    box_type: BoxType,

    /// Override the preset's minimum days to expiry.
    #[arg(long)]
    min_days: Option<i64>,

    /// Override the preset's maximum days to expiry.
    #[arg(long)]
    max_days: Option<i64>,

    /// Fixture set to load the catalog from.
    #[arg(short, long, default_value = "staples")]
    fixture: String,

    /// Base path of the fixture files.
    #[arg(long, default_value = "./fixtures")]
    fixtures_path: String,

    /// Restrict the fill to these categories (default: all).
    #[arg(short, long)]
    category: Vec<String>,

    /// Evaluate freshness as of this date (ISO); defaults to today.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// List replacements for one item instead of filling.
    #[arg(long, value_name = "CATEGORY:ITEM")]
    replace: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let catalog = Fixture::with_base_path(&args.fixtures_path).load_catalog(&args.fixture)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let mut window = args.box_type.window();
    if let Some(min_days) = args.min_days {
        window.min_days = min_days;
    }
    if let Some(max_days) = args.max_days {
        window.max_days = max_days;
    }

    if let Some(target) = &args.replace {
        let Some((category, item)) = target.split_once(':') else {
            return Err(format!("--replace expects CATEGORY:ITEM, got {target:?}").into());
        };

        return list_replacements(&catalog, category, item, window, today);
    }

    let mut filter = HamperFilter::allowing_all(&catalog, window);
    if !args.category.is_empty() {
        filter.categories.clone_from(&args.category);
    }

    let hamper = fill(&catalog, &filter, args.budget, today)?;

    if hamper.is_empty() {
        println!("No combination of catalog items fits the budget and filters.");
        return Ok(());
    }

    let summary = HamperSummary::build(&catalog, &hamper);
    println!("{}", summary.to_table());
    println!(
        "Budget utilization: {:.1}% of {}",
        hamper.utilization(args.budget),
        args.budget
    );

    Ok(())
}

fn list_replacements(
    catalog: &Catalog,
    category: &str,
    item: &str,
    window: ExpiryWindow,
    today: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    let filter = RowFilter::allowing_all(catalog, window);
    let suggestions = suggest(catalog, category, item, &filter, today);

    if suggestions.is_empty() {
        println!("No alternatives for {item:?} in {category:?}.");
        return Ok(());
    }

    for suggestion in &suggestions {
        println!(
            "{} - {} ({} available, expires {}, {})",
            suggestion.name,
            suggestion.price,
            suggestion.available_units,
            suggestion.formatted_expiry(),
            suggestion.brand,
        );
    }

    Ok(())
}
