//! The `testlet validate` command.

use std::path::PathBuf;

use anyhow::Result;

use testlet_core::config::load_config_from;
use testlet_core::parser::{load_testlet_directory, parse_testlet_file, validate_testlet_file};

pub fn execute(testlet_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let files = if testlet_path.is_dir() {
        load_testlet_directory(&testlet_path)?
    } else {
        vec![parse_testlet_file(&testlet_path)?]
    };

    let mut total_warnings = 0;
    let mut invalid = 0;

    for file in &files {
        let item_count = file.items.as_ref().map_or(0, Vec::len);
        println!("Testlet: {} ({item_count} items)", file.id);

        let warnings = validate_testlet_file(file);
        for w in &warnings {
            let prefix = w
                .item_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();

        if let Err(e) = file.build(&config) {
            println!("  ERROR: {e}");
            invalid += 1;
        }
    }

    if total_warnings > 0 {
        println!("\n{total_warnings} warning(s) found.");
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} testlet(s) invalid", files.len());
    }

    if total_warnings == 0 {
        println!("All testlets valid.");
    }

    Ok(())
}
