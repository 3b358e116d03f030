//! CLI tool to generate sample data and the decomposer comparison report.
//!
//! Produces:
//! - `output/sample_amounts.json`: 200 seeded sample amounts
//! - `output/comparison_report.json`: Greedy vs random comparison

use anyhow::Context;
use make_change::data::get_sample_dataset;
use make_change::logger::init_cli_logger;
use make_change::models::EnablementSet;
use make_change::report::generate_report;
use make_change::ChangeEngine;

/// Seed for the random decomposer, so the report is reproducible.
const REPORT_SEED: u64 = 7;

fn main() -> anyhow::Result<()> {
    init_cli_logger(false);

    // Generate sample amounts
    let amounts = get_sample_dataset();
    let amounts_json = serde_json::to_string_pretty(&amounts).context("Failed to serialize amounts")?;
    std::fs::create_dir_all("output").context("Failed to create output directory")?;
    std::fs::write("output/sample_amounts.json", &amounts_json).context("Failed to write amounts")?;
    println!("Wrote output/sample_amounts.json ({} amounts)", amounts.len());

    // Generate comparison report
    let mut engine = ChangeEngine::seeded(REPORT_SEED);
    let report = generate_report(&amounts, &EnablementSet::all(), &mut engine)?;
    let report_json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    std::fs::write("output/comparison_report.json", &report_json).context("Failed to write report")?;

    // Print summary
    println!("Wrote output/comparison_report.json");
    println!();
    println!("=== COMPARISON REPORT SUMMARY ===");
    println!("Total Amounts: {}", report.total_amounts);
    for (name, scenario) in [("Greedy", &report.greedy), ("Random", &report.random)] {
        println!();
        println!("--- {name} ---");
        println!("  Decomposed:   {}", scenario.decomposed);
        println!("  Infeasible:   {}", scenario.infeasible);
        println!("  Total Coins:  {}", scenario.total_coins);
        println!("  Avg Coins:    {:.2}", scenario.avg_coins);
        for (denomination, count) in &scenario.by_denomination {
            println!("    {:<9} {}", denomination.plural(), count);
        }
    }
    println!();
    println!("--- Random Overhead ---");
    println!("  Compared:     {} amounts", report.overhead.compared);
    println!("  Extra Coins:  {}", report.overhead.extra_coins);
    println!("  Coin Ratio:   {:.2}x", report.overhead.coin_ratio);

    Ok(())
}
