use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] shapebench_core::ValidationError),

    #[error(transparent)]
    Stats(#[from] shapebench_core::StatsError),

    #[error(transparent)]
    Stock(#[from] shapebench_core::StockError),

    #[error(transparent)]
    Core(#[from] shapebench_core::CoreError),

    #[error("{failed} failed test(s) found in log")]
    TestFailures { failed: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::TestFailures { .. } => 1,
            Self::Validation(_) | Self::Stock(_) => 2,
            Self::Stats(_) => 3,
            Self::Serialization(_) => 4,
            Self::Core(_) | Self::Io(_) => 10,
        }
    }
}
