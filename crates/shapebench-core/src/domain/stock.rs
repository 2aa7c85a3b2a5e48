use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// One synthetic listing with its intraday prices and index weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub name: String,
    pub symbol: Symbol,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub weight: f64,
}

impl Stock {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        symbol: Symbol,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }

        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;
        validate_non_negative("weight", weight)?;

        if high < low {
            return Err(ValidationError::InvalidPriceOrder);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidPriceBounds);
        }

        Ok(Self {
            name,
            symbol,
            open,
            high,
            low,
            close,
            weight,
        })
    }

    /// Same listing with a different weight.
    pub fn with_weight(self, weight: f64) -> Result<Self, ValidationError> {
        validate_non_negative("weight", weight)?;
        Ok(Self { weight, ..self })
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
