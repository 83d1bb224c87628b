use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A tradable stock listed in the market.
///
/// Identity is the symbol; the price changes only through
/// [`Market::update_price`](super::market::Market::update_price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker symbol (uppercase by convention, e.g. "AAPL")
    pub symbol: String,

    /// Current price per share
    pub price: Decimal,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }
}

impl std::fmt::Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ${:.2}", self.symbol, self.price)
    }
}

/// A symbol must be non-empty and carry no surrounding whitespace, so that it
/// reads back from the holdings file exactly as it was written.
pub(crate) fn validate_symbol(symbol: &str) -> Result<(), CoreError> {
    if symbol.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "Stock symbol must not be blank".into(),
        ));
    }
    if symbol.trim() != symbol {
        return Err(CoreError::ValidationError(format!(
            "Stock symbol {symbol:?} must not start or end with whitespace"
        )));
    }
    Ok(())
}
