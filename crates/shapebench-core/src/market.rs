//! # Synthetic Stock Market
//!
//! [`StockMarketGenerator`] builds a batch of listings whose prices are derived
//! from each other (`low <= open, close <= high`), each carrying a unique
//! three-letter [`Symbol`] spelled from its company name and a weight. Weights
//! are normalized across the batch so they sum to one. [`index_values`] turns a
//! batch into weighted open/high/close index levels.
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use shapebench_core::{index_values, StockMarketConfig, StockMarketGenerator, SyntheticCompanySource};
//!
//! let generator = StockMarketGenerator::new(StockMarketConfig {
//!     count: 10,
//!     start_range: 100.0,
//!     end_range: 2000.0,
//!     ..StockMarketConfig::default()
//! })?;
//! let mut companies = SyntheticCompanySource::new(StdRng::seed_from_u64(1));
//! let stocks = generator.generate(&mut companies, &mut StdRng::seed_from_u64(2))?;
//! let index = index_values(&stocks);
//! assert!(index.high >= index.open);
//! # Ok::<(), shapebench_core::StockError>(())
//! ```

use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{SYMBOL_LEN, SYMBOL_SPACE};
use crate::numeric::{apportion, round_to};
use crate::source::CompanySource;
use crate::{Stock, StockError, Symbol, ValidationError};

/// Decimal places kept on prices, weights and index values.
pub const PRICE_PLACES: u32 = 4;

const HIGH_FACTOR: (f64, f64) = (1.001, 1.15);
const LOW_FACTOR: (f64, f64) = (0.85, 1.0);

/// Batch shape for [`StockMarketGenerator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockMarketConfig {
    /// Number of listings to produce.
    pub count: usize,
    /// Inclusive lower bound for opening prices.
    pub start_range: f64,
    /// Exclusive upper bound for opening prices.
    pub end_range: f64,
    /// Symbol draws tried per company name before the name is discarded.
    pub symbol_attempts: usize,
    /// Upper bound on company names drawn per batch; `None` retries forever.
    pub max_name_draws: Option<usize>,
}

impl Default for StockMarketConfig {
    fn default() -> Self {
        Self {
            count: 100,
            start_range: 10.0,
            end_range: 500.0,
            symbol_attempts: 20,
            max_name_draws: None,
        }
    }
}

impl StockMarketConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.start_range.is_finite() || self.start_range <= 0.0 {
            return Err(ValidationError::InvalidPriceFloor {
                start: self.start_range,
            });
        }
        // the range must hold at least one price on the PRICE_PLACES grid
        let scale = 10_f64.powi(PRICE_PLACES as i32);
        let lowest_price = (self.start_range * scale).ceil() / scale;
        if !self.end_range.is_finite()
            || self.start_range >= self.end_range
            || lowest_price >= self.end_range
        {
            return Err(ValidationError::InvalidPriceRange {
                start: self.start_range,
                end: self.end_range,
            });
        }
        if self.symbol_attempts == 0 {
            return Err(ValidationError::InvalidSymbolAttempts);
        }
        if self.count > SYMBOL_SPACE {
            return Err(ValidationError::BatchExceedsSymbolSpace {
                requested: self.count,
                available: SYMBOL_SPACE,
            });
        }
        Ok(())
    }
}

/// Produces batches of [`Stock`]s.
#[derive(Debug, Clone)]
pub struct StockMarketGenerator {
    config: StockMarketConfig,
}

impl StockMarketGenerator {
    /// Validates the configuration up front; an invalid range produces no generator.
    pub fn new(config: StockMarketConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate one batch of exactly `config.count` listings.
    ///
    /// Company names whose letters cannot yield an unused symbol within
    /// `symbol_attempts` draws are discarded and a fresh name is requested.
    /// With `max_name_draws` unset this relies on the source eventually
    /// offering enough usable names.
    pub fn generate<C, R>(&self, companies: &mut C, rng: &mut R) -> Result<Vec<Stock>, StockError>
    where
        C: CompanySource + ?Sized,
        R: Rng + ?Sized,
    {
        let config = &self.config;
        let mut used = HashSet::with_capacity(config.count);
        let mut listings = Vec::with_capacity(config.count);
        let mut raw_weights = Vec::with_capacity(config.count);
        let mut draws = 0_usize;

        while listings.len() < config.count {
            if config.max_name_draws.is_some_and(|limit| draws >= limit) {
                return Err(StockError::NameSourceExhausted {
                    draws,
                    produced: listings.len(),
                    requested: config.count,
                });
            }
            draws += 1;

            let name = companies.next_company_name();
            let alphabet = symbol_alphabet(&name);
            let Some(symbol) = self.unused_symbol(&alphabet, &used, rng)? else {
                debug!(
                    company = %name,
                    "no unused symbol after {} draws, discarding name",
                    config.symbol_attempts
                );
                continue;
            };

            let (open, high, low, close) = self.prices(rng);
            let stock = Stock::new(name, symbol.clone(), open, high, low, close, 0.0)?;

            used.insert(symbol);
            raw_weights.push(rng.gen::<f64>());
            listings.push(stock);
        }

        let total: f64 = raw_weights.iter().sum();
        if total <= 0.0 {
            warn!(count = config.count, "raw weights summed to zero, splitting evenly");
        }

        listings
            .into_iter()
            .zip(apportion(&raw_weights, PRICE_PLACES))
            .map(|(stock, weight)| stock.with_weight(weight).map_err(StockError::from))
            .collect()
    }

    fn unused_symbol<R: Rng + ?Sized>(
        &self,
        alphabet: &[char],
        used: &HashSet<Symbol>,
        rng: &mut R,
    ) -> Result<Option<Symbol>, ValidationError> {
        if alphabet.is_empty() {
            return Ok(None);
        }

        for _ in 0..self.config.symbol_attempts {
            let letters: [char; SYMBOL_LEN] =
                std::array::from_fn(|_| alphabet[rng.gen_range(0..alphabet.len())]);
            let symbol = Symbol::from_letters(letters)?;
            if !used.contains(&symbol) {
                return Ok(Some(symbol));
            }
        }
        Ok(None)
    }

    /// Draw `(open, high, low, close)`, all rounded to [`PRICE_PLACES`].
    ///
    /// Rounding is monotonic, so rounding `open` first and deriving the rest
    /// from the rounded value keeps the ordering intact.
    fn prices<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64, f64, f64) {
        let (start, end) = (self.config.start_range, self.config.end_range);
        let open = loop {
            let candidate = round_to(rng.gen_range(start..end), PRICE_PLACES);
            if candidate >= start && candidate < end {
                break candidate;
            }
        };
        let high = round_to(
            open * rng.gen_range(HIGH_FACTOR.0..=HIGH_FACTOR.1),
            PRICE_PLACES,
        );
        let low = round_to(
            open * rng.gen_range(LOW_FACTOR.0..=LOW_FACTOR.1),
            PRICE_PLACES,
        );
        let close = round_to(rng.gen_range(low..=high), PRICE_PLACES);
        (open, high, low, close)
    }
}

/// Distinct uppercase ASCII letters of `name`, in alphabetical order.
pub fn symbol_alphabet(name: &str) -> Vec<char> {
    name.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Weighted index levels of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketIndex {
    pub open: f64,
    pub high: f64,
    pub close: f64,
}

/// Sum of `price * weight` for open, high and close, each rounded to
/// [`PRICE_PLACES`]. Weights are used as given.
pub fn index_values(stocks: &[Stock]) -> MarketIndex {
    let weighted = |price: fn(&Stock) -> f64| {
        round_to(
            stocks.iter().map(|stock| price(stock) * stock.weight).sum(),
            PRICE_PLACES,
        )
    };

    MarketIndex {
        open: weighted(|stock: &Stock| stock.open),
        high: weighted(|stock: &Stock| stock.high),
        close: weighted(|stock: &Stock| stock.close),
    }
}
