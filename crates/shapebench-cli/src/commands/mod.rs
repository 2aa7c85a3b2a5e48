mod compare;
mod profiles;
mod score;
mod stocks;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub text: Option<String>,
    pub warnings: Vec<String>,
    pub failures: usize,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            text: None,
            warnings: Vec::new(),
            failures: 0,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_failures(mut self, failures: usize) -> Self {
        self.failures = failures;
        self
    }
}

pub fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    debug!(command = ?cli.command, seed = ?cli.seed, "running command");
    match &cli.command {
        Command::Profiles(args) => profiles::run(args, cli.seed),
        Command::Compare(args) => compare::run(args, cli.seed),
        Command::Stocks(args) => stocks::run(args, cli.seed),
        Command::Score(args) => score::run(args),
    }
}

/// Independent RNG per consumer; `stream` separates consumers under one seed.
fn rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(stream_seed(seed, stream)),
        None => StdRng::from_entropy(),
    }
}

/// SplitMix64 finalizer over `seed` and `stream`, so `(seed, stream)` pairs
/// map to distinct seeds rather than colliding on their sum.
fn stream_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed ^ stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
