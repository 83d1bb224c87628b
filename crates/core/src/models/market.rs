use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::CoreError;

use super::stock::{validate_symbol, Stock};

/// The session's price list: symbol → listed stock.
///
/// Built once at startup (see [`Settings::build_market`](super::settings::Settings::build_market))
/// and passed by reference to whatever needs prices. Lookups are case-sensitive;
/// callers normalise user input before asking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Market {
    stocks: BTreeMap<String, Stock>,
}

impl Market {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a market from `(symbol, price)` pairs.
    /// Rejects negative prices; a repeated symbol keeps the last price.
    pub fn from_prices<I, S>(prices: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut market = Self::new();
        for (symbol, price) in prices {
            market.list(Stock::new(symbol, price))?;
        }
        Ok(market)
    }

    /// Add (or replace) a listing.
    pub fn list(&mut self, stock: Stock) -> Result<(), CoreError> {
        validate_symbol(&stock.symbol)?;
        validate_price(&stock.symbol, stock.price)?;
        self.stocks.insert(stock.symbol.clone(), stock);
        Ok(())
    }

    /// Look up a listed stock.
    pub fn lookup(&self, symbol: &str) -> Result<&Stock, CoreError> {
        self.stocks
            .get(symbol)
            .ok_or_else(|| CoreError::NotFound(symbol.to_string()))
    }

    /// Replace the price of a listed stock.
    pub fn update_price(&mut self, symbol: &str, new_price: Decimal) -> Result<(), CoreError> {
        validate_price(symbol, new_price)?;
        let stock = self
            .stocks
            .get_mut(symbol)
            .ok_or_else(|| CoreError::NotFound(symbol.to_string()))?;
        log::debug!("Price of {symbol} updated {} -> {new_price}", stock.price);
        stock.price = new_price;
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.stocks.contains_key(symbol)
    }

    /// All listings, sorted by symbol.
    #[must_use]
    pub fn snapshot(&self) -> Vec<&Stock> {
        self.stocks.values().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

fn validate_price(symbol: &str, price: Decimal) -> Result<(), CoreError> {
    if price < Decimal::ZERO {
        return Err(CoreError::ValidationError(format!(
            "Price of {symbol} must not be negative (got {price})"
        )));
    }
    Ok(())
}
