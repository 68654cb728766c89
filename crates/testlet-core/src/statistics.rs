//! Empirical position frequencies for randomized testlets.
//!
//! Under a uniform constrained permutation with `T` items, `C` calibration
//! items and `S` seen first:
//!
//! - a calibration item sits at a given lead position with probability `1/C`
//! - a calibration item sits at a given tail position with probability
//!   `(C-S) / (C·(T-S))`
//! - a scored item sits at a given tail position with probability `1/(T-S)`
//!   and never in the lead

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::config::TestletConfig;
use crate::model::ItemCategory;
use crate::testlet::Testlet;

/// Per-item, per-position placement counts over a number of trials.
#[derive(Debug, Clone, Serialize)]
pub struct PositionFrequencies {
    /// Number of randomizations sampled.
    pub trials: u32,
    /// Configuration of the sampled testlet.
    pub config: TestletConfig,
    /// Category of each item, keyed by item id.
    pub categories: BTreeMap<String, ItemCategory>,
    /// `counts[id][position]` = number of trials with `id` at `position`.
    pub counts: BTreeMap<String, Vec<u32>>,
}

impl PositionFrequencies {
    /// Randomize `testlet` `trials` times with `rng` and tally placements.
    pub fn sample<R: Rng + ?Sized>(testlet: &Testlet, trials: u32, rng: &mut R) -> Self {
        let config = *testlet.config();
        let mut categories = BTreeMap::new();
        let mut counts = BTreeMap::new();
        for item in testlet.items() {
            categories.insert(item.id.clone(), item.category);
            counts.insert(item.id.clone(), vec![0u32; config.total_count]);
        }

        for _ in 0..trials {
            for (position, item) in testlet.randomize_with(rng).iter().enumerate() {
                if let Some(row) = counts.get_mut(&item.id) {
                    row[position] += 1;
                }
            }
        }

        tracing::debug!(testlet = testlet.id(), trials, "sampled position frequencies");

        Self {
            trials,
            config,
            categories,
            counts,
        }
    }

    /// Observed frequency of `id` at `position`, or `None` for an unknown id
    /// or out-of-range position.
    pub fn frequency(&self, id: &str, position: usize) -> Option<f64> {
        let count = *self.counts.get(id)?.get(position)?;
        Some(self.share(count))
    }

    /// Fraction of trials in which `id` landed in the seen-first block.
    pub fn lead_share(&self, id: &str) -> Option<f64> {
        let row = self.counts.get(id)?;
        let lead: u32 = row.iter().take(self.config.seen_first_count).sum();
        Some(self.share(lead))
    }

    fn share(&self, count: u32) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            count as f64 / self.trials as f64
        }
    }

    /// Theoretical probability that an item of `category` lands at `position`.
    pub fn expected_frequency(&self, category: ItemCategory, position: usize) -> f64 {
        expected_frequency(&self.config, category, position)
    }

    /// Largest absolute gap between observed and expected frequency over
    /// every (item, position) cell.
    pub fn max_deviation(&self) -> f64 {
        let mut worst = 0.0f64;
        for (id, category) in &self.categories {
            for position in 0..self.config.total_count {
                let observed = self.frequency(id, position).unwrap_or(0.0);
                let expected = self.expected_frequency(*category, position);
                worst = worst.max((observed - expected).abs());
            }
        }
        worst
    }
}

/// Theoretical placement probability under a uniform constrained permutation.
pub fn expected_frequency(config: &TestletConfig, category: ItemCategory, position: usize) -> f64 {
    let calibration = config.calibration_total as f64;
    let seen_first = config.seen_first_count as f64;
    let tail = config.tail_len() as f64;

    if position >= config.total_count {
        return 0.0;
    }
    let in_lead = position < config.seen_first_count;

    match (category, in_lead) {
        (ItemCategory::Calibration, true) => 1.0 / calibration,
        (ItemCategory::Scored, true) => 0.0,
        (ItemCategory::Calibration, false) => {
            (calibration - seen_first) / (calibration * tail)
        }
        (ItemCategory::Scored, false) => 1.0 / tail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Absolute per-cell tolerance for 10,000 trials. The largest standard
    /// error is sqrt(0.25·0.75/10_000) ≈ 0.0043, so 0.03 is about 7σ.
    const TOLERANCE: f64 = 0.03;

    fn standard_testlet() -> Testlet {
        let config = TestletConfig::default();
        let mut items: Vec<Item> = (0..4).map(|i| Item::calibration(format!("pretest{i}"))).collect();
        items.extend((0..6).map(|j| Item::scored(format!("operational{j}"))));
        Testlet::new("uniformity", Some(items), &config).unwrap()
    }

    #[test]
    fn expected_frequencies_sum_to_one_per_position() {
        let config = TestletConfig::default();
        for position in 0..config.total_count {
            let sum = config.calibration_total as f64
                * expected_frequency(&config, ItemCategory::Calibration, position)
                + config.scored_total as f64
                    * expected_frequency(&config, ItemCategory::Scored, position);
            assert!((sum - 1.0).abs() < 1e-9, "position {position}: {sum}");
        }
    }

    #[test]
    fn expected_frequencies_for_standard_config() {
        let config = TestletConfig::default();
        assert!((expected_frequency(&config, ItemCategory::Calibration, 0) - 0.25).abs() < 1e-9);
        assert_eq!(expected_frequency(&config, ItemCategory::Scored, 1), 0.0);
        assert!((expected_frequency(&config, ItemCategory::Calibration, 2) - 0.0625).abs() < 1e-9);
        assert!((expected_frequency(&config, ItemCategory::Scored, 9) - 0.125).abs() < 1e-9);
    }

    #[test]
    fn calibration_items_share_the_lead_equally() {
        let testlet = standard_testlet();
        let mut rng = StdRng::seed_from_u64(2024);
        let freqs = PositionFrequencies::sample(&testlet, 10_000, &mut rng);

        // Each of 4 calibration items fills one of 2 lead slots half the time.
        for i in 0..4 {
            let share = freqs.lead_share(&format!("pretest{i}")).unwrap();
            assert!((share - 0.5).abs() < TOLERANCE, "pretest{i}: {share}");
        }
        for j in 0..6 {
            assert_eq!(freqs.lead_share(&format!("operational{j}")), Some(0.0));
        }
    }

    #[test]
    fn every_position_is_uniform_under_the_constraint() {
        let testlet = standard_testlet();
        let mut rng = StdRng::seed_from_u64(7);
        let freqs = PositionFrequencies::sample(&testlet, 10_000, &mut rng);

        let deviation = freqs.max_deviation();
        assert!(deviation < TOLERANCE, "max deviation {deviation}");
    }

    #[test]
    fn frequencies_serialize_per_item_rows() {
        let testlet = standard_testlet();
        let mut rng = StdRng::seed_from_u64(3);
        let freqs = PositionFrequencies::sample(&testlet, 50, &mut rng);

        let json = serde_json::to_value(&freqs).unwrap();
        assert_eq!(json["trials"], 50);
        assert_eq!(json["categories"]["pretest0"], "calibration");
        let row = json["counts"]["operational5"].as_array().unwrap();
        assert_eq!(row.len(), 10);
        let placed: u64 = row.iter().map(|c| c.as_u64().unwrap()).sum();
        assert_eq!(placed, 50);
    }

    #[test]
    fn unknown_item_has_no_frequency() {
        let testlet = standard_testlet();
        let mut rng = StdRng::seed_from_u64(1);
        let freqs = PositionFrequencies::sample(&testlet, 10, &mut rng);
        assert!(freqs.frequency("missing", 0).is_none());
        assert!(freqs.lead_share("missing").is_none());
        assert!(freqs.frequency("pretest0", 99).is_none());
    }
}
