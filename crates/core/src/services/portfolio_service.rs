use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::market::Market;
use crate::models::portfolio::Portfolio;
use crate::models::stock::validate_symbol;
use crate::models::transaction::{Side, Transaction};
use crate::models::valuation::{Valuation, ValuationLine};

/// Executes buy/sell trades against a portfolio and values its holdings.
///
/// Pure business logic — no I/O. Holdings and ledger are always mutated
/// together, or not at all.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Buy `quantity` shares of `symbol` at `unit_price`.
    ///
    /// There is no cash balance: a valid buy always succeeds.
    pub fn buy(
        &self,
        portfolio: &mut Portfolio,
        symbol: &str,
        quantity: u64,
        unit_price: Decimal,
    ) -> Result<Transaction, CoreError> {
        Self::validate_trade(symbol, quantity, unit_price)?;

        let owned = portfolio.quantity_of(symbol);
        let updated = owned.checked_add(quantity).ok_or_else(|| {
            CoreError::ValidationError(format!(
                "Buying {quantity} {symbol} would overflow the holding of {owned}"
            ))
        })?;

        let transaction = Transaction::new(Side::Buy, symbol, quantity, unit_price);
        portfolio.holdings.insert(symbol.to_string(), updated);
        portfolio.ledger.append(transaction.clone());

        log::debug!("Executed {transaction} (holding now {updated})");
        Ok(transaction)
    }

    /// Sell `quantity` shares of `symbol` at `unit_price`.
    ///
    /// Fails with [`CoreError::InsufficientShares`] when fewer shares are owned;
    /// in that case neither holdings nor ledger change. Selling down to zero
    /// keeps the symbol in the holdings with quantity 0.
    pub fn sell(
        &self,
        portfolio: &mut Portfolio,
        symbol: &str,
        quantity: u64,
        unit_price: Decimal,
    ) -> Result<Transaction, CoreError> {
        Self::validate_trade(symbol, quantity, unit_price)?;

        let owned = portfolio.quantity_of(symbol);
        if owned < quantity {
            return Err(CoreError::InsufficientShares {
                symbol: symbol.to_string(),
                requested: quantity,
                owned,
            });
        }

        let transaction = Transaction::new(Side::Sell, symbol, quantity, unit_price);
        portfolio.holdings.insert(symbol.to_string(), owned - quantity);
        portfolio.ledger.append(transaction.clone());

        log::debug!("Executed {transaction} (holding now {})", owned - quantity);
        Ok(transaction)
    }

    /// Buy at the market's current price for `symbol`.
    pub fn buy_at_market(
        &self,
        portfolio: &mut Portfolio,
        market: &Market,
        symbol: &str,
        quantity: u64,
    ) -> Result<Transaction, CoreError> {
        let price = market.lookup(symbol)?.price;
        self.buy(portfolio, symbol, quantity, price)
    }

    /// Sell at the market's current price for `symbol`.
    pub fn sell_at_market(
        &self,
        portfolio: &mut Portfolio,
        market: &Market,
        symbol: &str,
        quantity: u64,
    ) -> Result<Transaction, CoreError> {
        let price = market.lookup(symbol)?.price;
        self.sell(portfolio, symbol, quantity, price)
    }

    /// Value every holding (zero-quantity entries included) at current prices.
    ///
    /// A held symbol missing from the market aborts the whole valuation with
    /// [`CoreError::UnknownSymbol`]; a value too large for `Decimal` aborts it
    /// with [`CoreError::Overflow`]. No partial result is returned.
    pub fn valuation(&self, portfolio: &Portfolio, market: &Market) -> Result<Valuation, CoreError> {
        let mut lines = Vec::with_capacity(portfolio.holdings.len());
        let mut total_value = Decimal::ZERO;

        for (symbol, &quantity) in &portfolio.holdings {
            let unit_price = market
                .lookup(symbol)
                .map_err(|_| CoreError::UnknownSymbol(symbol.clone()))?
                .price;
            let line_value = Decimal::from(quantity)
                .checked_mul(unit_price)
                .ok_or_else(|| {
                    CoreError::Overflow(format!("value of {quantity} {symbol} at {unit_price}"))
                })?;
            total_value = total_value
                .checked_add(line_value)
                .ok_or_else(|| CoreError::Overflow("total portfolio value".into()))?;
            lines.push(ValuationLine {
                symbol: symbol.clone(),
                quantity,
                unit_price,
                line_value,
            });
        }

        Ok(Valuation { lines, total_value })
    }

    /// Validate trade inputs before touching the portfolio.
    ///
    /// Rules:
    /// - Symbol must not be blank or padded with whitespace
    /// - Quantity must be positive
    /// - Price must not be negative
    fn validate_trade(symbol: &str, quantity: u64, unit_price: Decimal) -> Result<(), CoreError> {
        validate_symbol(symbol)?;
        if quantity == 0 {
            return Err(CoreError::ValidationError(
                "Trade quantity must be positive".into(),
            ));
        }
        if unit_price < Decimal::ZERO {
            return Err(CoreError::ValidationError(format!(
                "Trade price must not be negative (got {unit_price})"
            )));
        }
        Ok(())
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
