//! TOML testlet file parser.
//!
//! Loads item collections from TOML files and directories, and checks them
//! for authoring mistakes that construction does not catch.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::TestletConfig;
use crate::error::TestletError;
use crate::model::{Item, ItemCategory};
use crate::testlet::Testlet;

/// Intermediate TOML structure for parsing testlet files.
#[derive(Debug, Deserialize)]
struct TomlTestletFile {
    testlet: TomlTestletHeader,
    #[serde(default)]
    items: Option<Vec<TomlItem>>,
}

#[derive(Debug, Deserialize)]
struct TomlTestletHeader {
    id: String,
}

#[derive(Debug, Deserialize)]
struct TomlItem {
    id: String,
    category: String,
}

/// An item collection as authored, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestletFile {
    /// Testlet identifier.
    pub id: String,
    /// The items, or `None` if the file has no `items` array.
    pub items: Option<Vec<Item>>,
}

impl TestletFile {
    /// Validate the items against `config` and build the testlet.
    pub fn build(&self, config: &TestletConfig) -> Result<Testlet, TestletError> {
        Testlet::new(self.id.clone(), self.items.clone(), config)
    }
}

/// Parse a single TOML file into a `TestletFile`.
pub fn parse_testlet_file(path: &Path) -> Result<TestletFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read testlet file: {}", path.display()))?;

    parse_testlet_str(&content, path)
}

/// Parse a TOML string into a `TestletFile` (useful for testing).
pub fn parse_testlet_str(content: &str, source_path: &Path) -> Result<TestletFile> {
    let parsed: TomlTestletFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let items = parsed
        .items
        .map(|items| {
            items
                .into_iter()
                .map(|item| {
                    let category: ItemCategory = item
                        .category
                        .parse()
                        .map_err(|e: String| anyhow::anyhow!("item {}: {}", item.id, e))?;
                    Ok(Item::new(item.id, category))
                })
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    Ok(TestletFile {
        id: parsed.testlet.id,
        items,
    })
}

/// Recursively load all `.toml` testlet files from a directory.
pub fn load_testlet_directory(dir: &Path) -> Result<Vec<TestletFile>> {
    let mut files = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            files.extend(load_testlet_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_testlet_file(&path) {
                Ok(file) => files.push(file),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(files)
}

/// A warning from testlet file validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The item ID (if applicable).
    pub item_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a testlet file for authoring issues.
pub fn validate_testlet_file(file: &TestletFile) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if file.id.trim().is_empty() {
        warnings.push(ValidationWarning {
            item_id: None,
            message: "testlet id is empty".into(),
        });
    }

    let Some(items) = &file.items else {
        return warnings;
    };

    let mut seen_ids = HashSet::new();
    for item in items {
        if item.id.trim().is_empty() {
            warnings.push(ValidationWarning {
                item_id: None,
                message: format!("{} item has an empty id", item.category),
            });
        } else if !seen_ids.insert(&item.id) {
            warnings.push(ValidationWarning {
                item_id: Some(item.id.clone()),
                message: format!("duplicate item ID: {}", item.id),
            });
        }
    }

    warnings
}
