use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Value of the whole portfolio at current market prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// One line per held symbol, sorted by symbol
    pub lines: Vec<ValuationLine>,

    /// Sum of all line values
    pub total_value: Decimal,
}

/// Value of a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationLine {
    pub symbol: String,

    /// Shares held (may be zero)
    pub quantity: u64,

    /// Current market price per share
    pub unit_price: Decimal,

    /// quantity × unit_price
    pub line_value: Decimal,
}

impl Valuation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
