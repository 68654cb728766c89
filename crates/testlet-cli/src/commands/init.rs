//! The `testlet init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("testlet.toml").exists() {
        println!("testlet.toml already exists, skipping.");
    } else {
        std::fs::write("testlet.toml", SAMPLE_CONFIG)?;
        println!("Created testlet.toml");
    }

    std::fs::create_dir_all("testlets")?;
    let example_path = std::path::Path::new("testlets/example.toml");
    if example_path.exists() {
        println!("testlets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_TESTLET)?;
        println!("Created testlets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit testlets/example.toml with your items");
    println!("  2. Run: testlet validate --testlet testlets/example.toml");
    println!("  3. Run: testlet randomize --testlet testlets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# testlet configuration

total_count = 10
calibration_total = 4
scored_total = 6
seen_first_count = 2
"#;

const EXAMPLE_TESTLET: &str = r#"[testlet]
id = "example"

[[items]]
id = "pretest0"
category = "calibration"

[[items]]
id = "pretest1"
category = "calibration"

[[items]]
id = "pretest2"
category = "calibration"

[[items]]
id = "pretest3"
category = "calibration"

[[items]]
id = "operational0"
category = "scored"

[[items]]
id = "operational1"
category = "scored"

[[items]]
id = "operational2"
category = "scored"

[[items]]
id = "operational3"
category = "scored"

[[items]]
id = "operational4"
category = "scored"

[[items]]
id = "operational5"
category = "scored"
"#;
