//! Core data model types for testlets.
//!
//! An [`Item`] is an identifier plus the category that decides where it may
//! appear in a presentation order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The role an item plays within a testlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// Administered for statistical calibration; does not count toward the score.
    #[serde(alias = "pretest")]
    Calibration,
    /// Contributes to the final score.
    #[serde(alias = "operational")]
    Scored,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemCategory::Calibration => write!(f, "calibration"),
            ItemCategory::Scored => write!(f, "scored"),
        }
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calibration" | "pretest" => Ok(ItemCategory::Calibration),
            "scored" | "operational" => Ok(ItemCategory::Scored),
            other => Err(format!("unknown item category: {other}")),
        }
    }
}

/// A single test item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within a testlet.
    pub id: String,
    /// Calibration or scored.
    pub category: ItemCategory,
}

impl Item {
    pub fn new(id: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }

    pub fn calibration(id: impl Into<String>) -> Self {
        Self::new(id, ItemCategory::Calibration)
    }

    pub fn scored(id: impl Into<String>) -> Self {
        Self::new(id, ItemCategory::Scored)
    }

    pub fn is_calibration(&self) -> bool {
        self.category == ItemCategory::Calibration
    }
}
