use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Number of letters in every generated ticker.
pub const SYMBOL_LEN: usize = 3;

/// Count of distinct tickers that can exist (`26^3`).
pub const SYMBOL_SPACE: usize = 26 * 26 * 26;

/// Three-letter uppercase ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a ticker to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();

        for (index, ch) in normalized.chars().enumerate() {
            if !ch.is_ascii_alphabetic() {
                return Err(ValidationError::SymbolInvalidChar { ch, index });
            }
        }

        let len = normalized.chars().count();
        if len != SYMBOL_LEN {
            return Err(ValidationError::SymbolLength {
                len,
                expected: SYMBOL_LEN,
            });
        }

        Ok(Self(normalized))
    }

    /// Build a ticker from letters already known to be uppercase ASCII.
    pub(crate) fn from_letters(letters: [char; SYMBOL_LEN]) -> Result<Self, ValidationError> {
        Self::parse(&letters.iter().collect::<String>())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_symbol() {
        let parsed = Symbol::parse(" abc ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "ABC");
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Symbol::parse("ABCD").expect_err("must fail");
        assert_eq!(err, ValidationError::SymbolLength { len: 4, expected: 3 });
    }

    #[test]
    fn rejects_non_alphabetic_chars() {
        let err = Symbol::parse("A1C").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolInvalidChar { ch: '1', index: 1 }));
    }

    #[test]
    fn deserializes_through_validation() {
        let err = serde_json::from_str::<Symbol>("\"AB-\"");
        assert!(err.is_err());
        let ok: Symbol = serde_json::from_str("\"xyz\"").expect("valid symbol");
        assert_eq!(ok.as_str(), "XYZ");
    }
}
