//! The `testlet stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use testlet_core::statistics::PositionFrequencies;

pub fn execute(
    testlet_path: PathBuf,
    trials: u32,
    seed: Option<u64>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(trials >= 1, "trials must be at least 1");

    let testlet = super::load_testlet(&testlet_path, config_path.as_deref())?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let freqs = PositionFrequencies::sample(&testlet, trials, &mut rng);
    let config = testlet.config();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&freqs)?);
            return Ok(());
        }
        "text" => {}
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    let mut table = Table::new();
    table.set_header(vec!["Item", "Category", "Lead %", "Expected %"]);

    for item in testlet.items() {
        let lead = freqs.lead_share(&item.id).unwrap_or(0.0);
        let expected: f64 = (0..config.seen_first_count)
            .map(|position| freqs.expected_frequency(item.category, position))
            .sum();
        table.add_row(vec![
            Cell::new(&item.id),
            Cell::new(item.category),
            Cell::new(format!("{:.1}%", lead * 100.0)),
            Cell::new(format!("{:.1}%", expected * 100.0)),
        ]);
    }

    println!(
        "Testlet: {} ({trials} trials, {} seen first)",
        testlet.id(),
        config.seen_first_count
    );
    println!("{table}");
    println!("Max deviation: {:.4}", freqs.max_deviation());

    Ok(())
}
