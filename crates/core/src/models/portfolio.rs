use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ledger::Ledger;

/// Symbol → number of shares owned. Sorted by symbol.
pub type Holdings = BTreeMap<String, u64>;

/// The main data container for one user session.
///
/// Holdings are persisted between runs; the ledger only covers trades made
/// since the portfolio was created or last loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Display name of the owner
    pub owner: String,

    /// Shares owned per symbol. Entries sold down to zero are kept.
    pub(crate) holdings: Holdings,

    /// Trades executed in this session
    pub(crate) ledger: Ledger,
}

impl Portfolio {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            holdings: Holdings::new(),
            ledger: Ledger::new(),
        }
    }

    #[must_use]
    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Shares owned of `symbol`, 0 if never held.
    #[must_use]
    pub fn quantity_of(&self, symbol: &str) -> u64 {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Replace (not merge) the holdings, e.g. after loading from disk.
    /// The ledger is left as is.
    pub fn replace_holdings(&mut self, holdings: Holdings) {
        self.holdings = holdings;
    }
}
