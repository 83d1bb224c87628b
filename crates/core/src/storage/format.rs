use crate::errors::CoreError;
use crate::models::portfolio::Holdings;

/// Separator between symbol and quantity on each line.
pub const FIELD_SEPARATOR: char = ',';

/// Platform line separator used when writing.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Encode holdings as the flat-file format.
///
/// Layout (no header, one record per line, sorted by symbol):
/// ```text
/// AAPL,10
/// TSLA,3
/// ```
/// The format has no escaping and the reader trims fields, so a symbol that
/// is blank, padded with whitespace, or contains the separator or a line
/// break is rejected instead of producing a file that reads back differently.
pub fn write_holdings(holdings: &Holdings) -> Result<String, CoreError> {
    let mut out = String::new();
    for (symbol, quantity) in holdings {
        if symbol.contains(FIELD_SEPARATOR) || symbol.contains(&['\n', '\r'][..]) {
            return Err(CoreError::Serialization(format!(
                "Symbol {symbol:?} cannot be stored: contains a separator or line break"
            )));
        }
        if symbol.trim().is_empty() || symbol.trim() != symbol {
            return Err(CoreError::Serialization(format!(
                "Symbol {symbol:?} cannot be stored: blank or padded with whitespace"
            )));
        }
        out.push_str(symbol);
        out.push(FIELD_SEPARATOR);
        out.push_str(&quantity.to_string());
        out.push_str(LINE_ENDING);
    }
    Ok(out)
}

/// Decode the flat-file format into holdings.
///
/// Any malformed line aborts the whole read with [`CoreError::CorruptData`]
/// (1-based line number). Blank lines are skipped and fields are trimmed.
/// A symbol appearing twice keeps its last quantity.
pub fn read_holdings(text: &str) -> Result<Holdings, CoreError> {
    let mut holdings = Holdings::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
        if fields.len() != 2 {
            return Err(CoreError::CorruptData {
                line,
                message: format!("expected SYMBOL,QUANTITY but found {} field(s)", fields.len()),
            });
        }

        let symbol = fields[0].trim();
        if symbol.is_empty() {
            return Err(CoreError::CorruptData {
                line,
                message: "empty symbol".into(),
            });
        }

        let quantity_text = fields[1].trim();
        let quantity: u64 = quantity_text.parse().map_err(|_| CoreError::CorruptData {
            line,
            message: format!("quantity {quantity_text:?} is not a non-negative integer"),
        })?;

        if holdings.insert(symbol.to_string(), quantity).is_some() {
            log::warn!("Symbol {symbol} repeated on line {line}; keeping quantity {quantity}");
        }
    }

    Ok(holdings)
}
