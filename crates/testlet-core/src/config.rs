//! Testlet configuration and loading.
//!
//! The four counts a testlet is validated against. Defaults match the
//! standard 10-item testlet: 4 calibration, 6 scored, 2 calibration items
//! seen first.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Required shape of a testlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestletConfig {
    /// Number of items per testlet.
    #[serde(default = "default_total_count")]
    pub total_count: usize,
    /// Number of calibration items per testlet.
    #[serde(default = "default_calibration_total")]
    pub calibration_total: usize,
    /// Number of scored items per testlet.
    #[serde(default = "default_scored_total")]
    pub scored_total: usize,
    /// Calibration items that must occupy the leading positions.
    #[serde(default = "default_seen_first_count")]
    pub seen_first_count: usize,
}

fn default_total_count() -> usize {
    10
}
fn default_calibration_total() -> usize {
    4
}
fn default_scored_total() -> usize {
    6
}
fn default_seen_first_count() -> usize {
    2
}

impl Default for TestletConfig {
    fn default() -> Self {
        Self {
            total_count: default_total_count(),
            calibration_total: default_calibration_total(),
            scored_total: default_scored_total(),
            seen_first_count: default_seen_first_count(),
        }
    }
}

impl TestletConfig {
    pub fn new(
        total_count: usize,
        calibration_total: usize,
        scored_total: usize,
        seen_first_count: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            total_count,
            calibration_total,
            scored_total,
            seen_first_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the counts are consistent with each other.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calibration_total.checked_add(self.scored_total) != Some(self.total_count) {
            return Err(ConfigError::TotalMismatch {
                calibration: self.calibration_total,
                scored: self.scored_total,
                total: self.total_count,
            });
        }
        if self.seen_first_count > self.calibration_total {
            return Err(ConfigError::SeenFirstExceedsCalibration {
                seen_first: self.seen_first_count,
                calibration: self.calibration_total,
            });
        }
        Ok(())
    }

    /// Number of positions after the seen-first block.
    pub fn tail_len(&self) -> usize {
        self.total_count - self.seen_first_count
    }
}

/// Load config from an explicit path, or search the default location.
///
/// Environment overrides: `TESTLET_TOTAL_COUNT`, `TESTLET_CALIBRATION_TOTAL`,
/// `TESTLET_SCORED_TOTAL`, `TESTLET_SEEN_FIRST_COUNT`.
pub fn load_config_from(path: Option<&Path>) -> Result<TestletConfig> {
    load_config_with(path, |var| std::env::var(var).ok())
}

/// Like [`load_config_from`], reading overrides through `lookup` instead of
/// the process environment.
pub fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TestletConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("testlet.toml");
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TestletConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;
    config.validate()?;

    tracing::debug!(?config, "loaded testlet config");
    Ok(config)
}

/// Parse a TOML config string. The counts may sit at the top level or
/// under a `[testlet]` table.
pub fn parse_config_str(content: &str) -> Result<TestletConfig> {
    #[derive(Deserialize)]
    struct Wrapped {
        testlet: TestletConfig,
    }

    let value: toml::Table = toml::from_str(content)?;
    if value.contains_key("testlet") {
        let wrapped: Wrapped = toml::from_str(content)?;
        Ok(wrapped.testlet)
    } else {
        Ok(toml::from_str(content)?)
    }
}

fn apply_env_overrides(
    config: &mut TestletConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    let overrides: [(&str, &mut usize); 4] = [
        ("TESTLET_TOTAL_COUNT", &mut config.total_count),
        ("TESTLET_CALIBRATION_TOTAL", &mut config.calibration_total),
        ("TESTLET_SCORED_TOTAL", &mut config.scored_total),
        ("TESTLET_SEEN_FIRST_COUNT", &mut config.seen_first_count),
    ];
    for (var, field) in overrides {
        if let Some(raw) = lookup(var) {
            *field = raw
                .trim()
                .parse()
                .with_context(|| format!("{var} must be an unsigned integer, got {raw:?}"))?;
        }
    }
    Ok(())
}
