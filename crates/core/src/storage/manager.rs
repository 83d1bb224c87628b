use std::io::ErrorKind;
use std::path::Path;

use crate::errors::CoreError;
use crate::models::portfolio::{Holdings, Portfolio};

use super::format;

/// High-level storage operations: save/load holdings to/from a flat file.
pub struct StorageManager;

impl StorageManager {
    /// Encode a portfolio's holdings to the flat-file text.
    pub fn save_to_string(portfolio: &Portfolio) -> Result<String, CoreError> {
        format::write_holdings(portfolio.holdings())
    }

    /// Decode holdings from flat-file text.
    pub fn load_from_str(text: &str) -> Result<Holdings, CoreError> {
        format::read_holdings(text)
    }

    /// Overwrite `path` with the portfolio's holdings.
    ///
    /// The text is fully encoded before the file is opened, so an
    /// unstorable symbol leaves an existing file untouched.
    pub fn save_to_file(portfolio: &Portfolio, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let path = path.as_ref();
        let text = Self::save_to_string(portfolio)?;
        std::fs::write(path, text)
            .map_err(|e| CoreError::FileIO(format!("{}: {e}", path.display())))?;
        log::info!(
            "Saved {} holding(s) to {}",
            portfolio.holdings().len(),
            path.display()
        );
        Ok(())
    }

    /// Read holdings from `path`.
    ///
    /// A missing file is not an error: it yields empty holdings.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Holdings, CoreError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No portfolio file at {}; starting empty", path.display());
                return Ok(Holdings::new());
            }
            Err(e) => return Err(CoreError::FileIO(format!("{}: {e}", path.display()))),
        };

        let holdings = Self::load_from_str(&text)?;
        log::info!("Loaded {} holding(s) from {}", holdings.len(), path.display());
        Ok(holdings)
    }
}
