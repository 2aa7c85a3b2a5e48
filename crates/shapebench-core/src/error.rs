use thiserror::Error;

/// Validation and contract errors exposed by `shapebench-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol must be exactly {expected} characters, got {len}")]
    SymbolLength { len: usize, expected: usize },
    #[error("symbol contains non-alphabetic character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("start_range must be less than end_range (got {start} >= {end})")]
    InvalidPriceRange { start: f64, end: f64 },
    #[error("start_range must be positive and finite (got {start})")]
    InvalidPriceFloor { start: f64 },
    #[error("requested {requested} stocks but only {available} distinct symbols exist")]
    BatchExceedsSymbolSpace { requested: usize, available: usize },
    #[error("symbol_attempts must be at least 1")]
    InvalidSymbolAttempts,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("stock high must be >= low")]
    InvalidPriceOrder,
    #[error("stock open/close must be within low/high range")]
    InvalidPriceBounds,

    #[error("company name cannot be empty")]
    EmptyCompanyName,
    #[error("age bounds are inverted: min {min} > max {max}")]
    InvalidAgeBounds { min: u32, max: u32 },
}

/// Failures raised while computing aggregate statistics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("statistic '{statistic}' requires a non-empty batch")]
    EmptyBatch { statistic: &'static str },
    #[error("profile map is missing field '{field}'")]
    MissingField { field: &'static str },
    #[error("profile map field '{field}' is not a {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Failures raised while generating a stock batch.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StockError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("company source exhausted after {draws} names with {produced} of {requested} symbols assigned")]
    NameSourceExhausted {
        draws: usize,
        produced: usize,
        requested: usize,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
