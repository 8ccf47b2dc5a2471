use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level command line interface.
#[derive(Parser)]
#[command(
    name = "metron",
    version,
    about = "Benchmark harness for classical time-series forecasting models"
)]
pub struct Cli {
    /// More output per occurrence (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate synthetic dataset files for the configured suite.
    Generate(GenerateArgs),
    /// Run the benchmark suite and print the report.
    Bench(BenchArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// TOML configuration to load.
    #[arg(short, long, default_value = "metron.toml")]
    pub config: PathBuf,

    /// Write series files here instead of the configured directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed the master RNG, overriding the configured value.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `bench` subcommand.
#[derive(clap::Args)]
pub struct BenchArgs {
    /// TOML configuration to load.
    #[arg(short, long, default_value = "metron.toml")]
    pub config: PathBuf,

    /// Fitting engine to benchmark (css or mean), overriding the config.
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Seed the master RNG, overriding the configured value.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the JSON report to this path.
    #[arg(short, long)]
    pub json: Option<PathBuf>,
}
