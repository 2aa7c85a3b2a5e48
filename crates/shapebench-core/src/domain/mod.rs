//! # Domain Models
//!
//! Canonical data shapes for shapebench.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ProfileRecord`] | Fixed-shape profile (blood type, location, age) |
//! | [`ProfileMap`] | The same profile as a string-keyed map of [`FieldValue`]s |
//! | [`Stock`] | Synthetic listing with open/high/low/close and index weight |
//! | [`Symbol`] | Validated three-letter ticker |
//!
//! Stocks enforce their price ordering at construction time:
//!
//! ```rust
//! use shapebench_core::{Stock, Symbol, ValidationError};
//!
//! let symbol = Symbol::parse("ACM").unwrap();
//! let invalid = Stock::new("Acme", symbol, 100.0, 105.0, 95.0, 120.0, 0.5);
//! assert!(matches!(invalid, Err(ValidationError::InvalidPriceBounds)));
//! ```

mod profile;
mod stock;
mod symbol;

pub use profile::{
    ages, profile_map, FieldValue, ProfileMap, ProfileRecord, AGE, BLOOD_TYPE, LATITUDE, LONGITUDE,
};
pub use stock::Stock;
pub use symbol::{Symbol, SYMBOL_LEN, SYMBOL_SPACE};
