//! CLI argument definitions for shapebench.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `profiles` | Generate profiles and print the four statistics |
//! | `compare` | Time record vs. map aggregation |
//! | `stocks` | Generate a synthetic stock market and its index |
//! | `score` | Grade a captured test-run log |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--seed` | none | Seed every random source for a reproducible run |
//!
//! Timing reports are logged to stderr; set `RUST_LOG=warn` to silence them.
//!
//! # Examples
//!
//! ```bash
//! shapebench compare --count 10000
//! shapebench stocks --count 100 --start-range 10 --end-range 500 --seed 7
//! LOG_FILE=result.log shapebench score
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shapebench_core::score::{DEFAULT_LOG_FILE, LOG_FILE_ENV};

/// Record vs. map benchmarking harness with a synthetic stock market.
#[derive(Debug, Parser)]
#[command(name = "shapebench", author, version, about)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Seed for all random sources; omitted means OS entropy.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Table,
    /// Single JSON object output.
    Json,
}

/// Profile representation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepresentationArg {
    /// Fixed-shape struct.
    Record,
    /// String-keyed map.
    Map,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate profiles and compute the four statistics.
    ///
    /// # Examples
    ///
    ///   shapebench profiles --count 10000
    ///   shapebench profiles --representation map --format json
    Profiles(ProfilesArgs),

    /// Time record vs. map aggregation on freshly generated batches.
    ///
    /// Each representation gets its own batch, so repeated runs can
    /// disagree when the two are close.
    Compare(CompareArgs),

    /// Generate a synthetic stock market and print its index values.
    Stocks(StocksArgs),

    /// Grade a test-run log and exit non-zero if any test failed.
    Score(ScoreArgs),
}

/// Arguments for the `profiles` command.
#[derive(Debug, Args)]
pub struct ProfilesArgs {
    /// Number of profiles to generate.
    #[arg(long, default_value_t = 10_000)]
    pub count: usize,

    /// In-memory representation to aggregate over.
    #[arg(long, value_enum, default_value_t = RepresentationArg::Record)]
    pub representation: RepresentationArg,
}

/// Arguments for the `compare` command.
#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Number of profiles per representation.
    #[arg(long, default_value_t = 10_000)]
    pub count: usize,
}

/// Arguments for the `stocks` command.
#[derive(Debug, Args)]
pub struct StocksArgs {
    /// Number of listings to generate.
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    /// Inclusive lower bound for opening prices.
    #[arg(long, default_value_t = 10.0)]
    pub start_range: f64,

    /// Exclusive upper bound for opening prices.
    #[arg(long, default_value_t = 500.0)]
    pub end_range: f64,

    /// Symbol draws per company name before the name is discarded.
    #[arg(long, default_value_t = 20)]
    pub symbol_attempts: usize,
}

/// Arguments for the `score` command.
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Test-run log to grade.
    #[arg(long, env = LOG_FILE_ENV, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}
