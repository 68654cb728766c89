//! The testlet: a validated, fixed-size bundle of items and its
//! constrained randomization.
//!
//! A [`Testlet`] checks its items once, on construction, and is read-only
//! afterwards. [`Testlet::randomize_with`] produces a presentation order in
//! which the first `seen_first_count` positions hold calibration items and
//! every order satisfying that constraint is equally likely.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::TestletConfig;
use crate::error::TestletError;
use crate::model::{Item, ItemCategory};

/// A validated testlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testlet {
    id: String,
    items: Vec<Item>,
    config: TestletConfig,
}

impl Testlet {
    /// Build a testlet, taking ownership of `items`.
    ///
    /// `None` stands for an absent item collection. Checks run in order:
    /// configuration, presence, total count, calibration count.
    pub fn new(
        id: impl Into<String>,
        items: Option<Vec<Item>>,
        config: &TestletConfig,
    ) -> Result<Self, TestletError> {
        config.validate()?;

        let items = items.ok_or(TestletError::MissingItems {
            expected: config.total_count,
        })?;

        if items.len() != config.total_count {
            return Err(TestletError::CountMismatch {
                expected: config.total_count,
                actual: items.len(),
            });
        }

        let calibration = items.iter().filter(|item| item.is_calibration()).count();
        if calibration != config.calibration_total {
            return Err(TestletError::RatioMismatch {
                expected: config.calibration_total,
                actual: calibration,
            });
        }

        let id = id.into();
        tracing::debug!(testlet = %id, items = items.len(), "testlet validated");

        Ok(Self {
            id,
            items,
            config: *config,
        })
    }

    /// Build a testlet from a borrowed slice; the items are cloned.
    pub fn from_slice(
        id: impl Into<String>,
        items: &[Item],
        config: &TestletConfig,
    ) -> Result<Self, TestletError> {
        Self::new(id, Some(items.to_vec()), config)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The stored items, in the order they were supplied.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn config(&self) -> &TestletConfig {
        &self.config
    }

    /// Randomize with a fresh entropy-seeded generator owned by this call.
    pub fn randomize(&self) -> Vec<Item> {
        self.randomize_with(&mut StdRng::from_entropy())
    }

    /// Randomize deterministically from `seed`.
    pub fn randomize_seeded(&self, seed: u64) -> Vec<Item> {
        self.randomize_with(&mut StdRng::seed_from_u64(seed))
    }

    /// Produce a presentation order using the supplied generator.
    ///
    /// The first `seen_first_count` items are drawn one at a time, without
    /// replacement, from the calibration pool. The rest are appended and
    /// shuffled in place over `[seen_first_count, total_count)`.
    pub fn randomize_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Item> {
        let seen_first = self.config.seen_first_count;
        let total = self.items.len();

        let (mut calibration_pool, scored_pool): (Vec<&Item>, Vec<&Item>) = self
            .items
            .iter()
            .partition(|item| item.category == ItemCategory::Calibration);

        let mut result = Vec::with_capacity(total);
        for _ in 0..seen_first {
            let index = rng.gen_range(0..calibration_pool.len());
            result.push(calibration_pool.remove(index).clone());
        }

        result.extend(calibration_pool.into_iter().cloned());
        result.extend(scored_pool.into_iter().cloned());

        for j in (seen_first..total).rev() {
            let k = rng.gen_range(seen_first..=j);
            result.swap(k, j);
        }

        tracing::trace!(testlet = %self.id, "randomized");
        result
    }
}
