use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::CoreError;

use super::market::Market;

/// Default location of the holdings file, relative to the working directory.
pub const DEFAULT_PORTFOLIO_PATH: &str = "portfolio.txt";

/// Session configuration, optionally read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where holdings are loaded from at startup and saved to at exit.
    pub portfolio_path: PathBuf,

    /// Seed price list for the session's market.
    /// Keys: ticker symbols. Values: price per share.
    pub market: BTreeMap<String, Decimal>,
}

impl Default for Settings {
    fn default() -> Self {
        let market = [
            ("AAPL", Decimal::new(15000, 2)),
            ("GOOG", Decimal::new(270000, 2)),
            ("TSLA", Decimal::new(70000, 2)),
        ]
        .into_iter()
        .map(|(symbol, price)| (symbol.to_string(), price))
        .collect();

        Self {
            portfolio_path: PathBuf::from(DEFAULT_PORTFOLIO_PATH),
            market,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string. Missing fields use defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file on disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({} listed stocks)",
            path.as_ref().display(),
            settings.market.len()
        );
        Ok(settings)
    }

    /// Build the session market from the configured seed prices.
    pub fn build_market(&self) -> Result<Market, CoreError> {
        Market::from_prices(
            self.market
                .iter()
                .map(|(symbol, price)| (symbol.clone(), *price)),
        )
    }
}
