pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use rust_decimal::Decimal;
use std::path::Path;

use errors::CoreError;
use models::{
    ledger::Ledger,
    market::Market,
    portfolio::{Holdings, Portfolio},
    stock::Stock,
    transaction::Transaction,
    valuation::Valuation,
};
use services::portfolio_service::PortfolioService;
use storage::manager::StorageManager;

/// Main entry point for the Stock Tracker core library.
/// Holds the session's portfolio, the market it trades against, and the
/// services needed to operate on them.
#[must_use]
pub struct StockTracker {
    portfolio: Portfolio,
    market: Market,
    portfolio_service: PortfolioService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for StockTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockTracker")
            .field("owner", &self.portfolio.owner)
            .field("holdings", &self.portfolio.holdings().len())
            .field("transactions", &self.portfolio.ledger().len())
            .field("listed_stocks", &self.market.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl StockTracker {
    /// Start a session with an empty portfolio.
    pub fn create_new(owner: impl Into<String>, market: Market) -> Self {
        Self::build(Portfolio::new(owner), market)
    }

    /// Start a session with holdings read from `path`.
    /// A missing file gives an empty portfolio; a malformed one is an error.
    pub fn load_from_file(
        owner: impl Into<String>,
        market: Market,
        path: impl AsRef<Path>,
    ) -> Result<Self, CoreError> {
        let holdings = StorageManager::load_from_file(path)?;
        let mut portfolio = Portfolio::new(owner);
        portfolio.replace_holdings(holdings);
        Ok(Self::build(portfolio, market))
    }

    /// Save holdings to `path`, overwriting it.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.portfolio, path)?;
        self.dirty = false;
        Ok(())
    }

    /// Replace the live holdings with those stored at `path`.
    /// On failure the current holdings are kept. Returns the number of holdings loaded.
    pub fn reload_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, CoreError> {
        let holdings = StorageManager::load_from_file(path)?;
        let count = holdings.len();
        self.portfolio.replace_holdings(holdings);
        self.dirty = false;
        Ok(count)
    }

    // ── Trading ─────────────────────────────────────────────────────

    /// Buy shares at the current market price.
    pub fn buy(&mut self, symbol: &str, quantity: u64) -> Result<Transaction, CoreError> {
        let transaction =
            self.portfolio_service
                .buy_at_market(&mut self.portfolio, &self.market, symbol, quantity)?;
        self.dirty = true;
        Ok(transaction)
    }

    /// Sell shares at the current market price.
    pub fn sell(&mut self, symbol: &str, quantity: u64) -> Result<Transaction, CoreError> {
        let transaction =
            self.portfolio_service
                .sell_at_market(&mut self.portfolio, &self.market, symbol, quantity)?;
        self.dirty = true;
        Ok(transaction)
    }

    // ── Holdings & Value ────────────────────────────────────────────

    /// Value all holdings at current market prices.
    pub fn valuation(&self) -> Result<Valuation, CoreError> {
        self.portfolio_service
            .valuation(&self.portfolio, &self.market)
    }

    #[must_use]
    pub fn holdings(&self) -> &Holdings {
        self.portfolio.holdings()
    }

    #[must_use]
    pub fn quantity_of(&self, symbol: &str) -> u64 {
        self.portfolio.quantity_of(symbol)
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.portfolio.owner
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Trades of this session, oldest first.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        self.portfolio.ledger().all()
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        self.portfolio.ledger()
    }

    /// Export the session's trades as a JSON array.
    pub fn export_transactions_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self.portfolio.ledger().all())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize transactions to JSON: {e}")))
    }

    // ── Market ──────────────────────────────────────────────────────

    #[must_use]
    pub fn market(&self) -> &Market {
        &self.market
    }

    /// All listed stocks, sorted by symbol.
    #[must_use]
    pub fn market_snapshot(&self) -> Vec<&Stock> {
        self.market.snapshot()
    }

    pub fn lookup(&self, symbol: &str) -> Result<&Stock, CoreError> {
        self.market.lookup(symbol)
    }

    /// Change the listed price of a stock. Past transactions keep their price.
    pub fn update_price(&mut self, symbol: &str, new_price: Decimal) -> Result<(), CoreError> {
        self.market.update_price(symbol, new_price)
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if holdings changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio, market: Market) -> Self {
        Self {
            portfolio,
            market,
            portfolio_service: PortfolioService::new(),
            dirty: false,
        }
    }
}
