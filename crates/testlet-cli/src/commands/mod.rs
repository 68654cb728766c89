pub mod init;
pub mod randomize;
pub mod stats;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use testlet_core::config::load_config_from;
use testlet_core::parser::parse_testlet_file;
use testlet_core::testlet::Testlet;

/// Load config and a single testlet file, then build the testlet.
pub(crate) fn load_testlet(testlet_path: &Path, config_path: Option<&Path>) -> Result<Testlet> {
    let config = load_config_from(config_path)?;
    let file = parse_testlet_file(testlet_path)?;
    file.build(&config)
        .with_context(|| format!("invalid testlet: {}", testlet_path.display()))
}
