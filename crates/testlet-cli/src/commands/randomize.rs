//! The `testlet randomize` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use testlet_core::model::Item;

pub fn execute(
    testlet_path: PathBuf,
    seed: Option<u64>,
    count: usize,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(count >= 1, "count must be at least 1");

    let testlet = super::load_testlet(&testlet_path, config_path.as_deref())?;

    let orders: Vec<Vec<Item>> = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| testlet.randomize_with(&mut rng)).collect()
        }
        None => (0..count).map(|_| testlet.randomize()).collect(),
    };

    tracing::info!(testlet = testlet.id(), count, ?seed, "randomized testlet");

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&orders)?);
        }
        "text" => {
            let seen_first = testlet.config().seen_first_count;
            for (n, order) in orders.iter().enumerate() {
                if count > 1 {
                    println!("Order {}:", n + 1);
                }
                for (position, item) in order.iter().enumerate() {
                    let marker = if position < seen_first { "*" } else { " " };
                    println!(
                        "{marker}{:>3}  {:<12} {}",
                        position + 1,
                        item.category.to_string(),
                        item.id
                    );
                }
                if count > 1 && n + 1 < count {
                    println!();
                }
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
