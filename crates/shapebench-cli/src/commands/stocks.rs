use std::fmt::Write as _;

use serde::Serialize;
use shapebench_core::{
    index_values, MarketIndex, Stock, StockMarketConfig, StockMarketGenerator,
    SyntheticCompanySource,
};

use crate::cli::StocksArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct StocksResponseData {
    stocks: Vec<Stock>,
    index: MarketIndex,
}

pub fn run(args: &StocksArgs, seed: Option<u64>) -> Result<CommandResult, CliError> {
    let generator = StockMarketGenerator::new(StockMarketConfig {
        count: args.count,
        start_range: args.start_range,
        end_range: args.end_range,
        symbol_attempts: args.symbol_attempts,
        ..StockMarketConfig::default()
    })?;

    let mut companies = SyntheticCompanySource::new(super::rng(seed, 1));
    let stocks = generator.generate(&mut companies, &mut super::rng(seed, 2))?;
    let index = index_values(&stocks);

    let mut text = String::new();
    let _ = writeln!(
        text,
        "{:<6} {:>11} {:>11} {:>11} {:>11} {:>7}  name",
        "symbol", "open", "high", "low", "close", "weight"
    );
    for stock in &stocks {
        let _ = writeln!(
            text,
            "{:<6} {:>11.4} {:>11.4} {:>11.4} {:>11.4} {:>7.4}  {}",
            stock.symbol.as_str(),
            stock.open, stock.high, stock.low, stock.close, stock.weight, stock.name
        );
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "market open : {:.4}", index.open);
    let _ = writeln!(text, "market high : {:.4}", index.high);
    let _ = writeln!(text, "market close: {:.4}", index.close);

    let data = serde_json::to_value(StocksResponseData { stocks, index })?;
    Ok(CommandResult::ok(data).with_text(text))
}
