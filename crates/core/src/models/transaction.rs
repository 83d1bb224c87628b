use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Shares acquired
    Buy,
    /// Shares disposed of
    Sell,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A single executed trade.
///
/// Records are created once by the portfolio service and never mutated
/// afterwards; the price is the market price at the moment of the trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// Buy or Sell
    pub side: Side,

    /// Ticker symbol as it was traded
    pub symbol: String,

    /// Number of shares (always positive)
    pub quantity: u64,

    /// Price per share at execution time
    pub price: Decimal,

    /// When the trade was executed
    pub executed_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(side: Side, symbol: impl Into<String>, quantity: u64, price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            side,
            symbol: symbol.into(),
            quantity,
            price,
            executed_at: Utc::now(),
        }
    }

    /// Total cash value of the trade (quantity × price), `None` on overflow.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.price)
    }
}

/// Renders as `BUY 10 of AAPL at $150.00`.
impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} of {} at ${:.2}",
            self.side, self.quantity, self.symbol, self.price
        )
    }
}
