use serde::{Deserialize, Serialize};

use super::transaction::{Side, Transaction};

/// Append-only, execution-ordered record of trades for one session.
///
/// Only the portfolio service appends; readers get a slice, so iteration
/// is restartable and never consumes the history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// All transactions, oldest first.
    #[must_use]
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of bought minus sum of sold shares for `symbol` over this ledger.
    #[must_use]
    pub fn net_quantity(&self, symbol: &str) -> i128 {
        self.transactions
            .iter()
            .filter(|t| t.symbol == symbol)
            .map(|t| match t.side {
                Side::Buy => i128::from(t.quantity),
                Side::Sell => -i128::from(t.quantity),
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
