//! testlet CLI — validate testlet files and produce presentation orders.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "testlet", version, about = "Testlet validation and randomization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate testlet TOML files
    Validate {
        /// Path to testlet file or directory
        #[arg(long)]
        testlet: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print randomized presentation orders
    Randomize {
        /// Path to testlet file
        #[arg(long)]
        testlet: PathBuf,

        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,

        /// Number of orders to produce
        #[arg(long, default_value = "1")]
        count: usize,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Sample many orders and report position frequencies
    Stats {
        /// Path to testlet file
        #[arg(long)]
        testlet: PathBuf,

        /// Number of randomizations to sample
        #[arg(long, default_value = "10000")]
        trials: u32,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example testlet
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("testlet=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { testlet, config } => commands::validate::execute(testlet, config),
        Commands::Randomize {
            testlet,
            seed,
            count,
            format,
            config,
        } => commands::randomize::execute(testlet, seed, count, format, config),
        Commands::Stats {
            testlet,
            trials,
            seed,
            format,
            config,
        } => commands::stats::execute(testlet, trials, seed, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
