//! # Shapebench Core
//!
//! Synthetic data and measurement primitives for comparing a fixed-shape record
//! against a string-keyed map as the in-memory shape of the same data.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | Four profile statistics, once per representation |
//! | [`compare`] | Times both representations and reports the faster one |
//! | [`domain`] | Profile record/map, stock and symbol types |
//! | [`error`] | Core error types |
//! | [`market`] | Stock batch generator and weighted index values |
//! | [`numeric`] | Rounding and weight apportionment |
//! | [`score`] | Test-run log grading |
//! | [`source`] | Random profile and company-name providers |
//! | [`timing`] | Call instrumentation |
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use shapebench_core::{PerformanceComparator, SyntheticProfileSource};
//!
//! let source = SyntheticProfileSource::new(StdRng::seed_from_u64(42));
//! let year = source.current_year();
//! let mut comparator = PerformanceComparator::new(source, year);
//! let comparison = comparator.compare(1_000)?;
//! println!("{}", comparison.verdict());
//! # Ok::<(), shapebench_core::StatsError>(())
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ ProfileSource   │────▶│ record / map     │────▶│ Performance      │
//! │                 │     │ aggregators      │     │ Comparator       │
//! └─────────────────┘     └──────────────────┘     └──────────────────┘
//!                                  ▲ timing::instrument
//! ┌─────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ CompanySource   │────▶│ StockMarket      │────▶│ index_values     │
//! │                 │     │ Generator        │     │                  │
//! └─────────────────┘     └──────────────────┘     └──────────────────┘
//! ```

pub mod aggregate;
pub mod compare;
pub mod domain;
pub mod error;
pub mod market;
pub mod numeric;
pub mod score;
pub mod source;
pub mod timing;

pub use aggregate::ProfileStatistics;
pub use compare::{Comparison, PerformanceComparator, Representation, RepresentationRun};
pub use domain::{ages, FieldValue, ProfileMap, ProfileRecord, Stock, Symbol};
pub use error::{CoreError, StatsError, StockError, ValidationError};
pub use market::{index_values, MarketIndex, StockMarketConfig, StockMarketGenerator};
pub use score::{ScoreConfig, ScoreSummary};
pub use source::{
    current_year, generate_profile_maps, generate_profile_records, CompanySource, ProfileSource,
    ProfileSourceConfig, RawProfile, SyntheticCompanySource, SyntheticProfileSource,
};
pub use timing::{instrument, time_call, try_instrument, try_time_call, TimingLog, TimingReport};
