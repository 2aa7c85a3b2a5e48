//! Behaviour tests for the stock market generator and index calculation.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use shapebench_core::{
    index_values, Stock, StockMarketConfig, StockMarketGenerator, SyntheticCompanySource,
    ValidationError,
};

fn generate(count: usize, start_range: f64, end_range: f64, seed: u64) -> Vec<Stock> {
    let generator = StockMarketGenerator::new(StockMarketConfig {
        count,
        start_range,
        end_range,
        ..StockMarketConfig::default()
    })
    .expect("valid config");
    let mut companies = SyntheticCompanySource::new(StdRng::seed_from_u64(seed));
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    generator
        .generate(&mut companies, &mut rng)
        .expect("stock batch")
}

#[test]
fn batch_has_requested_length() {
    for count in [1, 10, 100, 500] {
        assert_eq!(generate(count, 100.0, 2000.0, count as u64).len(), count);
    }
}

#[test]
fn symbols_are_three_unique_letters_from_the_name() {
    let stocks = generate(100, 100.0, 2000.0, 7);
    let mut seen = HashSet::new();

    for stock in &stocks {
        let symbol = stock.symbol.as_str();
        assert_eq!(symbol.len(), 3, "{symbol}");
        assert!(symbol.chars().all(|ch| ch.is_ascii_uppercase()), "{symbol}");
        let name = stock.name.to_ascii_uppercase();
        assert!(symbol.chars().all(|ch| name.contains(ch)), "{symbol} from {}", stock.name);
        assert!(seen.insert(symbol.to_owned()), "duplicate symbol {symbol}");
    }
}

#[test]
fn prices_respect_ordering_and_bounds() {
    for stock in generate(200, 100.0, 2000.0, 11) {
        assert!(stock.open >= 100.0 && stock.open < 2000.0, "open {}", stock.open);
        assert!(stock.low <= stock.open && stock.open <= stock.high, "{stock:?}");
        assert!(stock.low <= stock.close && stock.close <= stock.high, "{stock:?}");
        assert!(stock.high <= stock.open * 1.15 + 1e-4, "{stock:?}");
        assert!(stock.low >= stock.open * 0.85 - 1e-4, "{stock:?}");
    }
}

#[test]
fn prices_have_four_decimal_places() {
    for stock in generate(50, 10.0, 500.0, 13) {
        for price in [stock.open, stock.high, stock.low, stock.close, stock.weight] {
            let scaled = price * 10_000.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{price}");
        }
    }
}

#[test]
fn weights_sum_to_one() {
    for (count, seed) in [(1, 1), (3, 2), (10, 3), (100, 4), (1_000, 5)] {
        let stocks = generate(count, 100.0, 2000.0, seed);
        let total: f64 = stocks.iter().map(|stock| stock.weight).sum();
        assert!((total - 1.0).abs() < 1e-6, "count {count}: total {total}");
        assert!(stocks.iter().all(|stock| stock.weight >= 0.0));
    }
}

#[test]
fn invalid_range_is_rejected_before_generation() {
    let err = StockMarketGenerator::new(StockMarketConfig {
        count: 10,
        start_range: 200.0,
        end_range: 100.0,
        ..StockMarketConfig::default()
    })
    .expect_err("inverted range must fail");
    assert_eq!(
        err,
        ValidationError::InvalidPriceRange {
            start: 200.0,
            end: 100.0
        }
    );
}

#[test]
fn market_index_stays_within_price_envelope() {
    let stocks = generate(10, 100.0, 2000.0, 21);
    let index = index_values(&stocks);
    let min_low = stocks.iter().map(|s| s.low).fold(f64::INFINITY, f64::min);

    assert!(index.high >= index.open);
    assert!(index.high >= index.close);
    assert!(index.close >= min_low);
}

#[test]
fn market_index_ignores_batch_order() {
    let stocks = generate(100, 10.0, 500.0, 31);
    let original = index_values(&stocks);

    let mut shuffled = stocks.clone();
    shuffled.shuffle(&mut StdRng::seed_from_u64(77));
    let reordered = index_values(&shuffled);

    assert!((original.open - reordered.open).abs() <= 1e-4);
    assert!((original.high - reordered.high).abs() <= 1e-4);
    assert!((original.close - reordered.close).abs() <= 1e-4);
}

#[test]
fn seeded_generation_is_reproducible() {
    assert_eq!(generate(25, 10.0, 500.0, 3), generate(25, 10.0, 500.0, 3));
}

#[test]
fn stocks_serialize_with_plain_symbol_strings() {
    let stocks = generate(2, 10.0, 500.0, 8);
    let json = serde_json::to_value(&stocks).expect("serializable");
    let symbol = json[0]["symbol"].as_str().expect("symbol string");
    assert_eq!(symbol, stocks[0].symbol.as_str());
}
