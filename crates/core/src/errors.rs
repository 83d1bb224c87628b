use thiserror::Error;

/// Unified error type for the entire stock-tracker-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Market ──────────────────────────────────────────────────────
    #[error("Symbol not found in market: {0}")]
    NotFound(String),

    #[error("Held symbol {0} is not listed in the market")]
    UnknownSymbol(String),

    // ── Trading ─────────────────────────────────────────────────────
    #[error("Not enough shares of {symbol} to sell: requested {requested}, owned {owned}")]
    InsufficientShares {
        symbol: String,
        requested: u64,
        owned: u64,
    },

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    // ── Storage / File ──────────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Corrupt portfolio data on line {line}: {message}")]
    CorruptData { line: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
